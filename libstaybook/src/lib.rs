//! Staybook - hotel booking flow
//!
//! This library provides the reservation form core shared by the Staybook
//! front ends: the draft record, picker overlays, date rules, the submit
//! gate and the hand-off to the next screen. It has no rendering, storage
//! or network dependencies.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use booking::{
    BookingFlow, BookingPolicy, Confirmation, DatePolicy, DraftField, FormCommand, Navigator,
    PickerSurface, PickerVisibility, ReservationDraft, ReservationForm, SubmitOutcome,
};
pub use catalog::Hotel;
pub use config::Config;
pub use error::{StaybookError, Result};
pub use types::{DateSlot, GuestCount, RoomType};
