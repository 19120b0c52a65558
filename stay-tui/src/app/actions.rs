//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Keys are translated into
//! higher-level actions by the reducer itself.

use crossterm::event::KeyEvent;
use libstaybook::FormCommand;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Mount a fresh booking form for the current hotel
    OpenBooking,

    /// Abandon the booking form and return to the hotel
    GoBack,

    /// Leave the confirmation screen
    CloseConfirmation,

    // === Booking form ===
    /// Forward a command to the live form session
    Form(FormCommand),

    /// Move focus to the next field
    FocusNext,

    /// Move focus to the previous field
    FocusPrev,

    /// Move the open picker's cursor by `delta` (days for calendars, rows for lists)
    MovePickerCursor(i64),

    /// Complete the open picker with its cursor value
    ConfirmPicker,

    /// Dismiss the open picker without a value
    CancelPicker,

    /// Submit the form
    Submit,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Static hotel detail page
    HotelDetails,

    /// Reservation form
    BookingForm,

    /// Summary after hand-off
    Confirmation,
}
