//! End-to-end workflow tests for the booking flow
//!
//! These tests verify complete booking sessions including:
//! - Filling every field and handing the draft off
//! - Submitting without accepting terms
//! - Picker exclusivity across a session
//! - Abandoning a session
//! - Building a confirmation from the handed-off draft

use chrono::NaiveDate;
use libstaybook::booking::{
    BookingFlow, BookingPolicy, Confirmation, DateOutcome, DatePolicy, DraftField, FormCommand,
    PickerSurface, PickerVisibility, RecordingNavigator, SubmitOutcome,
};
use libstaybook::{catalog, DateSlot, GuestCount, Result, RoomType};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn start(policy: BookingPolicy) -> BookingFlow<RecordingNavigator> {
    BookingFlow::start(RecordingNavigator::default(), date("2024-05-20"), policy)
}

#[test]
fn test_complete_booking_hands_off_exact_values() -> Result<()> {
    let mut flow = start(BookingPolicy::default());

    flow.dispatch(FormCommand::SetField(DraftField::parse("name", "Jane Doe")?));
    flow.dispatch(FormCommand::OpenPicker(PickerSurface::CheckIn));
    flow.dispatch(FormCommand::SelectDate {
        slot: DateSlot::CheckIn,
        date: Some(date("2024-06-01")),
    });
    flow.dispatch(FormCommand::OpenPicker(PickerSurface::CheckOut));
    flow.dispatch(FormCommand::SelectDate {
        slot: DateSlot::CheckOut,
        date: Some(date("2024-06-05")),
    });
    flow.dispatch(FormCommand::SetField(DraftField::parse("roomType", "Suite")?));
    flow.dispatch(FormCommand::SetField(DraftField::parse("guestCount", "2")?));
    flow.dispatch(FormCommand::ToggleTerms);

    let form = flow.form().expect("session is live");
    assert!(form.can_submit());
    assert!(form.picker().is_none());

    assert_eq!(flow.submit(), SubmitOutcome::HandedOff);

    let navigator = flow.into_navigator();
    assert_eq!(navigator.proceeded.len(), 1);
    let draft = &navigator.proceeded[0];
    assert_eq!(draft.guest_name, "Jane Doe");
    assert_eq!(draft.check_in, date("2024-06-01"));
    assert_eq!(draft.check_out, date("2024-06-05"));
    assert_eq!(draft.room_type, Some(RoomType::Suite));
    assert_eq!(draft.guest_count, GuestCount::new(2));
    assert!(draft.terms_accepted);
    assert_eq!(draft.phone_number, "");
    Ok(())
}

#[test]
fn test_submit_without_terms_never_hands_off() {
    let mut flow = start(BookingPolicy::default());

    assert_eq!(flow.submit(), SubmitOutcome::Blocked);
    assert!(flow.is_active());
    assert!(flow.navigator().proceeded.is_empty());
    assert_eq!(flow.navigator().back_count, 0);
}

#[test]
fn test_opening_second_picker_replaces_first() {
    let mut flow = start(BookingPolicy::default());

    flow.dispatch(FormCommand::OpenPicker(PickerSurface::RoomType));
    flow.dispatch(FormCommand::OpenPicker(PickerSurface::GuestCount));

    let picker = flow.form().map(|f| f.picker());
    assert_eq!(picker, Some(PickerVisibility::GuestCount));
}

#[test]
fn test_cancelled_check_in_keeps_date_and_closes_picker() {
    let mut flow = start(BookingPolicy::default());

    flow.dispatch(FormCommand::OpenPicker(PickerSurface::CheckIn));
    flow.dispatch(FormCommand::SelectDate {
        slot: DateSlot::CheckIn,
        date: None,
    });

    let form = flow.form().expect("session is live");
    assert_eq!(form.draft().check_in, date("2024-05-20"));
    assert!(form.picker().is_none());
}

#[test]
fn test_clamp_policy_keeps_range_ordered() {
    let mut flow = start(BookingPolicy::default());

    flow.dispatch(FormCommand::SelectDate {
        slot: DateSlot::CheckIn,
        date: Some(date("2024-06-10")),
    });

    let form = flow.form().expect("session is live");
    assert_eq!(form.draft().check_out, date("2024-06-10"));
    assert_eq!(
        form.last_date_outcome(),
        Some(DateOutcome::Clamped {
            adjusted: DateSlot::CheckOut,
            to: date("2024-06-10"),
        })
    );
}

#[test]
fn test_permissive_policy_reproduces_unchecked_dates() {
    let policy = BookingPolicy {
        dates: DatePolicy::Permissive,
        ..BookingPolicy::default()
    };
    let mut flow = start(policy);

    flow.dispatch(FormCommand::SelectDate {
        slot: DateSlot::CheckOut,
        date: Some(date("2024-05-01")),
    });
    flow.dispatch(FormCommand::ToggleTerms);
    assert_eq!(flow.submit(), SubmitOutcome::HandedOff);

    let draft = &flow.navigator().proceeded[0];
    assert!(draft.check_out < draft.check_in);
}

#[test]
fn test_go_back_discards_everything() {
    let mut flow = start(BookingPolicy::default());
    flow.dispatch(FormCommand::SetField(DraftField::GuestName("Jane".into())));
    flow.dispatch(FormCommand::ToggleTerms);

    flow.go_back();

    assert!(!flow.is_active());
    assert_eq!(flow.submit(), SubmitOutcome::Inactive);
    assert_eq!(flow.navigator().back_count, 1);
    assert!(flow.navigator().proceeded.is_empty());
}

#[test]
fn test_confirmation_for_handed_off_draft() -> Result<()> {
    let mut flow = start(BookingPolicy::default());
    flow.dispatch(FormCommand::SetField(DraftField::parse("checkIn", "2024-06-01")?));
    flow.dispatch(FormCommand::SetField(DraftField::parse("checkOut", "2024-06-04")?));
    flow.dispatch(FormCommand::SetField(DraftField::parse("phone", "555 0100")?));
    flow.dispatch(FormCommand::ToggleTerms);
    flow.submit();

    let hotel = catalog::find("palm-grove-hideaway")?;
    let confirmation = Confirmation::new(&flow.navigator().proceeded[0], hotel, "+1");

    assert_eq!(confirmation.nights, 3);
    assert_eq!(confirmation.estimated_total, Some(3 * 395));
    assert_eq!(confirmation.phone, "+1 555 0100");
    Ok(())
}
