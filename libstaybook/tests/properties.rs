//! Property-based tests for the reservation form
//!
//! Verify that the submit gate, picker exclusivity and date policies hold
//! for arbitrary drafts and command sequences.

use chrono::{Duration, NaiveDate};
use libstaybook::booking::{
    dates, BookingPolicy, DatePolicy, FormCommand, PickerSurface, ReservationDraft,
    ReservationForm, Submission,
};
use libstaybook::{DateSlot, GuestCount, RoomType};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (-60i64..60).prop_map(|offset| base_date() + Duration::days(offset))
}

fn room_strategy() -> impl Strategy<Value = Option<RoomType>> {
    prop::option::of(prop::sample::select(RoomType::ALL.to_vec()))
}

fn guests_strategy() -> impl Strategy<Value = Option<GuestCount>> {
    prop::option::of(prop::sample::select(GuestCount::ALL.to_vec()))
}

fn surface_strategy() -> impl Strategy<Value = PickerSurface> {
    prop::sample::select(vec![
        PickerSurface::CheckIn,
        PickerSurface::CheckOut,
        PickerSurface::RoomType,
        PickerSurface::GuestCount,
    ])
}

fn policy_strategy() -> impl Strategy<Value = DatePolicy> {
    prop::sample::select(vec![
        DatePolicy::Permissive,
        DatePolicy::Clamp,
        DatePolicy::Reject,
    ])
}

/// Generate arbitrary drafts, including inverted ranges and empty fields.
fn draft_strategy() -> impl Strategy<Value = ReservationDraft> {
    (
        ".{0,20}",
        date_strategy(),
        date_strategy(),
        room_strategy(),
        guests_strategy(),
        "[0-9 ]{0,12}",
        any::<bool>(),
    )
        .prop_map(
            |(guest_name, check_in, check_out, room_type, guest_count, phone_number, terms_accepted)| {
                ReservationDraft {
                    guest_name,
                    check_in,
                    check_out,
                    room_type,
                    guest_count,
                    phone_number,
                    terms_accepted,
                }
            },
        )
}

fn command_strategy() -> impl Strategy<Value = FormCommand> {
    prop_oneof![
        1 => Just(FormCommand::ToggleTerms),
        2 => surface_strategy().prop_map(FormCommand::OpenPicker),
        1 => Just(FormCommand::ClosePicker),
        2 => (prop::bool::ANY, prop::option::of(date_strategy())).prop_map(|(check_in, date)| {
            let slot = if check_in { DateSlot::CheckIn } else { DateSlot::CheckOut };
            FormCommand::SelectDate { slot, date }
        }),
        1 => room_strategy().prop_map(FormCommand::SelectRoomType),
        1 => guests_strategy().prop_map(FormCommand::SelectGuestCount),
    ]
}

proptest! {
    #[test]
    fn prop_no_terms_never_submits(draft in draft_strategy(), require in any::<bool>()) {
        let draft = ReservationDraft { terms_accepted: false, ..draft };
        let policy = BookingPolicy { require_selections: require, ..BookingPolicy::default() };
        let form = ReservationForm::from_draft(draft, policy);

        prop_assert!(!form.can_submit());
        prop_assert!(matches!(form.submit(), Submission::Blocked(_)));
    }

    /// Current behaviour: with the default policy, accepted terms is sufficient.
    #[test]
    fn prop_terms_alone_submits_under_default_policy(draft in draft_strategy()) {
        let draft = ReservationDraft { terms_accepted: true, ..draft };
        let form = ReservationForm::from_draft(draft.clone(), BookingPolicy::default());

        prop_assert!(form.can_submit());
        match form.submit() {
            Submission::HandedOff(handed) => prop_assert_eq!(handed, draft),
            Submission::Blocked(_) => prop_assert!(false, "expected hand-off"),
        }
    }

    #[test]
    fn prop_latest_open_wins(first in surface_strategy(), second in surface_strategy()) {
        let form = ReservationForm::new(base_date(), BookingPolicy::default())
            .open_picker(first)
            .open_picker(second);

        prop_assert_eq!(form.picker().surface(), Some(second));
    }

    #[test]
    fn prop_date_selection_always_closes_picker(
        commands in prop::collection::vec(command_strategy(), 0..30),
        check_in in any::<bool>(),
        date in prop::option::of(date_strategy()),
    ) {
        let mut form = ReservationForm::new(base_date(), BookingPolicy::default());
        for command in commands {
            form = form.apply(command);
        }

        let slot = if check_in { DateSlot::CheckIn } else { DateSlot::CheckOut };
        let before = form.draft().clone();
        let form = form.open_picker(slot.into()).apply_date_selection(slot, date);

        prop_assert!(form.picker().is_none());
        if date.is_none() {
            prop_assert_eq!(form.draft(), &before);
        }
    }

    #[test]
    fn prop_ordering_policies_keep_range_ordered(
        policy in policy_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..40),
    ) {
        let mut form = ReservationForm::new(
            base_date(),
            BookingPolicy { dates: policy, ..BookingPolicy::default() },
        );
        for command in commands {
            form = form.apply(command);
            if policy != DatePolicy::Permissive {
                prop_assert!(form.draft().check_in <= form.draft().check_out);
            }
        }
    }

    #[test]
    fn prop_format_for_display_is_pure(date in date_strategy()) {
        prop_assert_eq!(dates::format_for_display(date), dates::format_for_display(date));
    }
}
