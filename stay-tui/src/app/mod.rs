//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! The booking form itself is a [`libstaybook::ReservationForm`]; this layer
//! adds screens, field focus and picker cursors around it.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Screen};
pub use reducer::reduce;
pub use state::{AppState, BookingScreen, FormFocus, StatusBarState, UiConfig};
