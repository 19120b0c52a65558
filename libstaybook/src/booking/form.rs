//! Reservation form state machine
//!
//! [`ReservationForm`] owns one draft and one picker for a single booking
//! session. Every command consumes the form and returns the next one:
//! `(ReservationForm, FormCommand) -> ReservationForm`.
//!
//! Submission is the only gated transition. Under the default policy it
//! needs nothing but accepted terms; an empty name, phone, room type or
//! guest count never blocks it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{DateSlot, GuestCount, RoomType};

use super::dates::{self, DateOutcome, DatePolicy};
use super::draft::{DraftField, ReservationDraft};
use super::picker::{PickerSurface, PickerVisibility};

/// Rules a form session is created with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPolicy {
    /// Ordering rule for check-in/check-out
    pub dates: DatePolicy,
    /// Also require room type and guest count before submitting
    pub require_selections: bool,
}

/// Commands that mutate a form session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Replace one draft field
    SetField(DraftField),
    /// Flip the terms-accepted flag
    ToggleTerms,
    /// Show a picker surface
    OpenPicker(PickerSurface),
    /// Hide whatever picker is showing
    ClosePicker,
    /// Calendar completed; `None` means the picker was dismissed
    SelectDate {
        slot: DateSlot,
        date: Option<NaiveDate>,
    },
    /// Room type list completed; `None` means the picker was dismissed
    SelectRoomType(Option<RoomType>),
    /// Guest count list completed; `None` means the picker was dismissed
    SelectGuestCount(Option<GuestCount>),
}

/// Result of [`ReservationForm::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The session is over; the draft moves on by value
    HandedOff(ReservationDraft),
    /// Submission is not allowed yet; the form comes back unchanged
    Blocked(ReservationForm),
}

/// One booking session: draft, picker and the policy it runs under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    draft: ReservationDraft,
    picker: PickerVisibility,
    policy: BookingPolicy,
    last_date_outcome: Option<DateOutcome>,
}

impl ReservationForm {
    /// Start a session from a blank draft dated `today`
    pub fn new(today: NaiveDate, policy: BookingPolicy) -> Self {
        Self::from_draft(ReservationDraft::new(today), policy)
    }

    /// Start a session from an existing draft
    pub fn from_draft(draft: ReservationDraft, policy: BookingPolicy) -> Self {
        Self {
            draft,
            picker: PickerVisibility::None,
            policy,
            last_date_outcome: None,
        }
    }

    /// Apply one command
    pub fn apply(self, command: FormCommand) -> Self {
        match command {
            FormCommand::SetField(field) => self.set_field(field),
            FormCommand::ToggleTerms => self.toggle_terms_accepted(),
            FormCommand::OpenPicker(surface) => self.open_picker(surface),
            FormCommand::ClosePicker => self.close_picker(),
            FormCommand::SelectDate { slot, date } => self.apply_date_selection(slot, date),
            FormCommand::SelectRoomType(room_type) => self.apply_room_selection(room_type),
            FormCommand::SelectGuestCount(guests) => self.apply_guest_selection(guests),
        }
    }

    /// Replace exactly one field
    ///
    /// Date writes go through the date policy; every other write is stored
    /// verbatim. The picker is left as it is.
    pub fn set_field(self, field: DraftField) -> Self {
        tracing::debug!(field = field.name(), "Set reservation field");

        match field {
            DraftField::CheckIn(date) => self.write_date(DateSlot::CheckIn, date),
            DraftField::CheckOut(date) => self.write_date(DateSlot::CheckOut, date),
            other => Self {
                draft: self.draft.with_field(other),
                ..self
            },
        }
    }

    pub fn toggle_terms_accepted(self) -> Self {
        let terms_accepted = !self.draft.terms_accepted;
        tracing::debug!(terms_accepted, "Toggled terms acceptance");
        Self {
            draft: ReservationDraft {
                terms_accepted,
                ..self.draft
            },
            ..self
        }
    }

    /// Show `surface`; any other open surface closes
    pub fn open_picker(self, surface: PickerSurface) -> Self {
        tracing::debug!(%surface, "Opened picker");
        Self {
            picker: self.picker.open(surface),
            ..self
        }
    }

    pub fn close_picker(self) -> Self {
        Self {
            picker: self.picker.close(),
            ..self
        }
    }

    /// Complete a calendar picker
    ///
    /// A dismissed picker (`None`) leaves the draft as it was. Either way the
    /// picker closes.
    pub fn apply_date_selection(self, slot: DateSlot, date: Option<NaiveDate>) -> Self {
        let form = match date {
            Some(date) => self.write_date(slot, date),
            None => Self {
                last_date_outcome: Some(DateOutcome::Cancelled),
                ..self
            },
        };
        form.close_picker()
    }

    /// Complete the room type list; `None` keeps the current value
    pub fn apply_room_selection(self, room_type: Option<RoomType>) -> Self {
        let form = match room_type {
            Some(room_type) => self.set_field(DraftField::RoomType(room_type)),
            None => self,
        };
        form.close_picker()
    }

    /// Complete the guest count list; `None` keeps the current value
    pub fn apply_guest_selection(self, guests: Option<GuestCount>) -> Self {
        let form = match guests {
            Some(guests) => self.set_field(DraftField::GuestCount(guests)),
            None => self,
        };
        form.close_picker()
    }

    /// Whether [`submit`](Self::submit) would hand the draft off
    pub fn can_submit(&self) -> bool {
        if !self.draft.terms_accepted {
            return false;
        }
        !self.policy.require_selections || self.missing_selections().is_empty()
    }

    /// Selections that are still unset, in form order
    pub fn missing_selections(&self) -> Vec<PickerSurface> {
        let mut missing = Vec::new();
        if self.draft.room_type.is_none() {
            missing.push(PickerSurface::RoomType);
        }
        if self.draft.guest_count.is_none() {
            missing.push(PickerSurface::GuestCount);
        }
        missing
    }

    /// Hand the draft off when allowed, otherwise give the form back
    pub fn submit(self) -> Submission {
        if self.can_submit() {
            Submission::HandedOff(self.draft)
        } else {
            tracing::warn!(
                terms_accepted = self.draft.terms_accepted,
                require_selections = self.policy.require_selections,
                "Submission blocked"
            );
            Submission::Blocked(self)
        }
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn picker(&self) -> PickerVisibility {
        self.picker
    }

    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Outcome of the most recent date selection, for user feedback
    pub fn last_date_outcome(&self) -> Option<DateOutcome> {
        self.last_date_outcome
    }

    /// Nights in the current range; negative when inverted
    pub fn nights(&self) -> i64 {
        dates::nights(self.draft.check_in, self.draft.check_out)
    }

    fn write_date(self, slot: DateSlot, date: NaiveDate) -> Self {
        let (draft, outcome) = dates::apply_to_draft(self.draft, slot, date, self.policy.dates);
        Self {
            draft,
            last_date_outcome: Some(outcome),
            ..self
        }
    }
}
