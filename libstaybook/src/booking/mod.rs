//! Reservation flow
//!
//! The booking form as a set of pure state transitions, independent of any
//! rendering layer:
//!
//! - `draft`: the reservation record and single-field writes
//! - `dates`: date ordering policy and display formatting
//! - `picker`: which selection overlay is visible
//! - `form`: the form session state machine and its submit gate
//! - `handoff`: the [`Navigator`] seam and [`BookingFlow`] driver
//! - `confirmation`: summary of a handed-off reservation
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use libstaybook::booking::{
//!     BookingFlow, BookingPolicy, DraftField, FormCommand, RecordingNavigator, SubmitOutcome,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut flow = BookingFlow::start(RecordingNavigator::default(), today, BookingPolicy::default());
//!
//! flow.dispatch(FormCommand::SetField(DraftField::GuestName("Jane Doe".to_string())));
//! assert_eq!(flow.submit(), SubmitOutcome::Blocked);
//!
//! flow.dispatch(FormCommand::ToggleTerms);
//! assert_eq!(flow.submit(), SubmitOutcome::HandedOff);
//! assert_eq!(flow.navigator().proceeded[0].guest_name, "Jane Doe");
//! ```

pub mod confirmation;
pub mod dates;
pub mod draft;
pub mod form;
pub mod handoff;
pub mod picker;

// Re-export commonly used types
pub use confirmation::Confirmation;
pub use dates::{format_for_display, DateOutcome, DatePolicy};
pub use draft::{DraftField, ReservationDraft};
pub use form::{BookingPolicy, FormCommand, ReservationForm, Submission};
pub use handoff::{BookingFlow, Navigator, RecordingNavigator, SubmitOutcome};
pub use picker::{PickerSurface, PickerVisibility};
