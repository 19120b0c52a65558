//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(State, Action) -> State`.
//! Keys are mapped to actions here; the booking rules themselves live in
//! [`ReservationForm`], which the reducer only feeds commands to.

use chrono::{Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libstaybook::booking::dates::{format_for_display, DateOutcome};
use libstaybook::{DraftField, FormCommand, GuestCount, PickerSurface, ReservationForm, RoomType};

use super::actions::{Action, Screen};
use super::state::{AppState, BookingScreen, FormFocus, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// No terminal access and no I/O besides tracing events.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::OpenBooking => {
            let form = ReservationForm::new(state.today, state.policy);
            AppState {
                booking: Some(BookingScreen::new(form)),
                current_screen: Screen::BookingForm,
                status: StatusBarState::default(),
                ..state
            }
        }

        Action::GoBack => state.abandon_booking(),

        Action::CloseConfirmation => AppState {
            current_screen: Screen::HotelDetails,
            status: StatusBarState::default(),
            ..state
        },

        // === Booking form ===
        Action::Form(command) => apply_form_command(state, command),

        Action::FocusNext => update_booking(state, |booking| BookingScreen {
            focus: booking.focus.next(),
            ..booking
        }),

        Action::FocusPrev => update_booking(state, |booking| BookingScreen {
            focus: booking.focus.prev(),
            ..booking
        }),

        Action::MovePickerCursor(delta) => update_booking(state, |booking| move_cursor(booking, delta)),

        Action::ConfirmPicker => match picker_result(&state, true) {
            Some(command) => reduce(state, Action::Form(command)),
            None => state,
        },

        Action::CancelPicker => match picker_result(&state, false) {
            Some(command) => reduce(state, Action::Form(command)),
            None => state,
        },

        Action::Submit => {
            let state = state.submit_booking();
            match &state.booking {
                Some(booking) => {
                    let message = blocked_message(&booking.form);
                    reduce(state, Action::SetStatus(message))
                }
                None => state,
            }
        }

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },
    }
}

/// Apply `f` to the live booking screen; no-op without one
fn update_booking(mut state: AppState, f: impl FnOnce(BookingScreen) -> BookingScreen) -> AppState {
    state.booking = state.booking.take().map(f);
    state
}

/// Forward a command to the form and keep the UI cursors and status in step
fn apply_form_command(state: AppState, command: FormCommand) -> AppState {
    let Some(booking) = state.booking.clone() else {
        return state;
    };

    let writes_date = matches!(
        command,
        FormCommand::SelectDate { .. }
            | FormCommand::SetField(DraftField::CheckIn(_))
            | FormCommand::SetField(DraftField::CheckOut(_))
    );

    let opened = match &command {
        FormCommand::OpenPicker(surface) => Some(*surface),
        _ => None,
    };

    let form = booking.form.apply(command);
    let mut booking = BookingScreen { form, ..booking };
    if let Some(surface) = opened {
        booking = seed_cursor(booking, surface);
    }

    let status = if writes_date {
        StatusBarState {
            message: booking.form.last_date_outcome().and_then(date_message),
        }
    } else {
        state.status.clone()
    };

    AppState {
        booking: Some(booking),
        status,
        ..state
    }
}

/// Point the picker cursor at the field's current value
fn seed_cursor(booking: BookingScreen, surface: PickerSurface) -> BookingScreen {
    let draft = booking.form.draft();
    let (check_in, check_out) = (draft.check_in, draft.check_out);
    let room_row = draft.room_type.map_or(0, |room| room.index());
    let guest_row = draft.guest_count.map_or(0, |guests| guests.index());

    match surface {
        PickerSurface::CheckIn => BookingScreen {
            calendar_cursor: check_in,
            ..booking
        },
        PickerSurface::CheckOut => BookingScreen {
            calendar_cursor: check_out,
            ..booking
        },
        PickerSurface::RoomType => BookingScreen {
            list_cursor: room_row,
            ..booking
        },
        PickerSurface::GuestCount => BookingScreen {
            list_cursor: guest_row,
            ..booking
        },
    }
}

fn move_cursor(booking: BookingScreen, delta: i64) -> BookingScreen {
    match booking.form.picker().surface() {
        Some(PickerSurface::CheckIn | PickerSurface::CheckOut) => BookingScreen {
            calendar_cursor: shift_date(booking.calendar_cursor, delta),
            ..booking
        },
        Some(PickerSurface::RoomType) => BookingScreen {
            list_cursor: shift_row(booking.list_cursor, delta, RoomType::ALL.len()),
            ..booking
        },
        Some(PickerSurface::GuestCount) => BookingScreen {
            list_cursor: shift_row(booking.list_cursor, delta, GuestCount::ALL.len()),
            ..booking
        },
        None => booking,
    }
}

fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

fn shift_row(row: usize, delta: i64, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    (row as i64 + delta).clamp(0, max) as usize
}

/// Completion command for the open picker, with or without a value
fn picker_result(state: &AppState, confirmed: bool) -> Option<FormCommand> {
    let booking = state.booking.as_ref()?;
    let surface = booking.form.picker().surface()?;

    let command = match surface.date_slot() {
        Some(slot) => FormCommand::SelectDate {
            slot,
            date: confirmed.then_some(booking.calendar_cursor),
        },
        None if surface == PickerSurface::RoomType => FormCommand::SelectRoomType(
            confirmed
                .then(|| RoomType::ALL.get(booking.list_cursor).copied())
                .flatten(),
        ),
        None => FormCommand::SelectGuestCount(
            confirmed
                .then(|| GuestCount::ALL.get(booking.list_cursor).copied())
                .flatten(),
        ),
    };
    Some(command)
}

fn date_message(outcome: DateOutcome) -> Option<String> {
    match outcome {
        DateOutcome::Clamped { adjusted, to } => Some(format!(
            "Adjusted {} to {}",
            adjusted,
            format_for_display(to)
        )),
        DateOutcome::Rejected => {
            Some("Check-out cannot be before check-in; date not changed".to_string())
        }
        DateOutcome::Applied | DateOutcome::Cancelled => None,
    }
}

fn blocked_message(form: &ReservationForm) -> String {
    if !form.draft().terms_accepted {
        return "Accept the terms and conditions to continue".to_string();
    }
    let missing: Vec<String> = form
        .missing_selections()
        .iter()
        .map(|surface| surface.to_string())
        .collect();
    format!("Choose a {} to continue", missing.join(" and "))
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        (KeyCode::Char('q'), KeyModifiers::NONE) if !is_typing(&state) => {
            return reduce(state, Action::Quit);
        }

        _ => {}
    }

    // Screen-specific keybindings
    match state.current_screen {
        Screen::HotelDetails => handle_hotel_key(state, key),
        Screen::BookingForm => handle_form_key(state, key),
        Screen::Confirmation => handle_confirmation_key(state, key),
    }
}

/// A text row has focus and no picker covers it
fn is_typing(state: &AppState) -> bool {
    state.current_screen == Screen::BookingForm
        && state
            .booking
            .as_ref()
            .map_or(false, |b| b.focus.is_text() && b.form.picker().is_none())
}

fn handle_hotel_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char('b') | KeyCode::Enter => reduce(state, Action::OpenBooking),
        _ => state,
    }
}

fn handle_confirmation_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => reduce(state, Action::CloseConfirmation),
        _ => state,
    }
}

fn handle_form_key(state: AppState, key: KeyEvent) -> AppState {
    let Some(booking) = state.booking.as_ref() else {
        return state;
    };

    if let Some(surface) = booking.form.picker().surface() {
        return handle_picker_key(state, key, surface);
    }

    let focus = booking.focus;
    match key.code {
        KeyCode::Tab | KeyCode::Down => reduce(state, Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => reduce(state, Action::FocusPrev),
        KeyCode::Esc => reduce(state, Action::GoBack),

        KeyCode::Enter => match focus {
            FormFocus::Continue if state.can_submit() => reduce(state, Action::Submit),
            FormFocus::Continue => state,
            FormFocus::Terms => reduce(state, Action::Form(FormCommand::ToggleTerms)),
            FormFocus::Name | FormFocus::Phone => reduce(state, Action::FocusNext),
            other => match other.picker() {
                Some(surface) => reduce(state, Action::Form(FormCommand::OpenPicker(surface))),
                None => state,
            },
        },

        KeyCode::Char(' ') if focus == FormFocus::Terms => {
            reduce(state, Action::Form(FormCommand::ToggleTerms))
        }

        KeyCode::Char(c) if focus.is_text() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit_text(state, focus, |text| text.push(c))
        }

        KeyCode::Backspace if focus.is_text() => edit_text(state, focus, |text| {
            text.pop();
        }),

        _ => state,
    }
}

fn handle_picker_key(state: AppState, key: KeyEvent, surface: PickerSurface) -> AppState {
    let calendar = surface.date_slot().is_some();
    match key.code {
        KeyCode::Esc => reduce(state, Action::CancelPicker),
        KeyCode::Enter => reduce(state, Action::ConfirmPicker),
        KeyCode::Left if calendar => reduce(state, Action::MovePickerCursor(-1)),
        KeyCode::Right if calendar => reduce(state, Action::MovePickerCursor(1)),
        KeyCode::Up if calendar => reduce(state, Action::MovePickerCursor(-7)),
        KeyCode::Down if calendar => reduce(state, Action::MovePickerCursor(7)),
        KeyCode::Up => reduce(state, Action::MovePickerCursor(-1)),
        KeyCode::Down => reduce(state, Action::MovePickerCursor(1)),
        _ => state,
    }
}

/// Rewrite the focused text field through a single-field form write
fn edit_text(state: AppState, focus: FormFocus, edit: impl FnOnce(&mut String)) -> AppState {
    let Some(booking) = state.booking.as_ref() else {
        return state;
    };
    let draft = booking.form.draft();

    let field = match focus {
        FormFocus::Name => {
            let mut name = draft.guest_name.clone();
            edit(&mut name);
            DraftField::GuestName(name)
        }
        FormFocus::Phone => {
            let mut phone = draft.phone_number.clone();
            edit(&mut phone);
            DraftField::PhoneNumber(phone)
        }
        _ => return state,
    };
    reduce(state, Action::Form(FormCommand::SetField(field)))
}
