//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! [`AppState`] is also the [`Navigator`] the booking form hands off to.

use chrono::{Local, NaiveDate};
use libstaybook::booking::Submission;
use libstaybook::{
    catalog, BookingPolicy, Config, Confirmation, Hotel, Navigator, PickerSurface,
    ReservationDraft, ReservationForm,
};

use super::actions::Screen;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub current_screen: Screen,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Hotel shown on the detail screen and booked by the form
    pub hotel: &'static Hotel,

    /// Live booking session. `None` outside the booking form.
    pub booking: Option<BookingScreen>,

    /// Last handed-off reservation. `None` until a submission succeeds.
    pub confirmation: Option<Confirmation>,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,

    /// Rules for new booking sessions
    pub policy: BookingPolicy,

    /// Display-only phone prefix
    pub country_code: String,

    /// Date new drafts start from
    pub today: NaiveDate,
}

/// Booking form screen: the form session plus UI-only cursor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingScreen {
    pub form: ReservationForm,
    pub focus: FormFocus,
    /// Highlighted day while a calendar picker is open
    pub calendar_cursor: NaiveDate,
    /// Highlighted row while a list picker is open
    pub list_cursor: usize,
}

impl BookingScreen {
    pub fn new(form: ReservationForm) -> Self {
        let calendar_cursor = form.draft().check_in;
        Self {
            form,
            focus: FormFocus::Name,
            calendar_cursor,
            list_cursor: 0,
        }
    }
}

/// Focusable rows of the booking form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    CheckIn,
    CheckOut,
    RoomType,
    Guests,
    Phone,
    Terms,
    Continue,
}

impl FormFocus {
    const ORDER: [FormFocus; 8] = [
        FormFocus::Name,
        FormFocus::CheckIn,
        FormFocus::CheckOut,
        FormFocus::RoomType,
        FormFocus::Guests,
        FormFocus::Phone,
        FormFocus::Terms,
        FormFocus::Continue,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next row, wrapping to the top
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous row, wrapping to the bottom
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Picker surface opened from this row, if it has one
    pub fn picker(self) -> Option<PickerSurface> {
        match self {
            FormFocus::CheckIn => Some(PickerSurface::CheckIn),
            FormFocus::CheckOut => Some(PickerSurface::CheckOut),
            FormFocus::RoomType => Some(PickerSurface::RoomType),
            FormFocus::Guests => Some(PickerSurface::GuestCount),
            _ => None,
        }
    }

    /// Rows that accept typed text
    pub fn is_text(self) -> bool {
        matches!(self, FormFocus::Name | FormFocus::Phone)
    }
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::HotelDetails,
            help_visible: false,
            hotel: catalog::default_hotel(),
            booking: None,
            confirmation: None,
            status: StatusBarState::default(),
            config: UiConfig::default(),
            policy: BookingPolicy::default(),
            country_code: "+1".to_string(),
            today: Local::now().date_naive(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_env(true, 100)
    }
}

impl UiConfig {
    /// Apply `NO_COLOR` and `STAYBOOK_TUI_TICK_MS` on top of configured values
    pub fn from_env(colors: bool, tick_rate_ms: u64) -> Self {
        let colors_enabled = colors && std::env::var_os("NO_COLOR").is_none();

        let tick_rate_ms = std::env::var("STAYBOOK_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(tick_rate_ms);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build state from loaded configuration
    pub fn from_config(config: &Config, hotel: &'static Hotel) -> Self {
        Self {
            hotel,
            config: UiConfig::from_env(config.tui.colors, config.tui.tick_rate_ms),
            policy: config.booking.policy(),
            country_code: config.booking.country_code.clone(),
            ..Self::default()
        }
    }

    /// Pin the date new drafts start from
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }

    /// Check if the Continue button is enabled
    pub fn can_submit(&self) -> bool {
        self.booking
            .as_ref()
            .map_or(false, |booking| booking.form.can_submit())
    }

    /// Submit the live form; a blocked form is put back untouched
    pub(crate) fn submit_booking(mut self) -> Self {
        let Some(booking) = self.booking.take() else {
            return self;
        };

        match booking.form.submit() {
            Submission::HandedOff(draft) => self.proceed(draft),
            Submission::Blocked(form) => self.booking = Some(BookingScreen { form, ..booking }),
        }
        self
    }

    /// Abandon the live form, if any
    pub(crate) fn abandon_booking(mut self) -> Self {
        if self.booking.is_some() {
            self.go_back();
        }
        self
    }
}

impl Navigator for AppState {
    fn proceed(&mut self, draft: ReservationDraft) {
        let confirmation = Confirmation::new(&draft, self.hotel, &self.country_code);
        tracing::info!(
            reference = %confirmation.reference,
            hotel = self.hotel.id,
            nights = confirmation.nights,
            "Booking submitted"
        );

        self.booking = None;
        self.confirmation = Some(confirmation);
        self.current_screen = Screen::Confirmation;
        self.status.message = Some("Booking submitted".to_string());
    }

    fn go_back(&mut self) {
        tracing::info!(hotel = self.hotel.id, "Booking form closed, draft discarded");

        self.booking = None;
        self.current_screen = Screen::HotelDetails;
        self.status.message = None;
    }
}
