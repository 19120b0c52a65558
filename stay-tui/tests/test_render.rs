//! Rendering against an in-memory backend
//!
//! Each screen is drawn into a `TestBackend` and the buffer text is checked
//! for the content that screen must show.

use chrono::NaiveDate;
use libstaybook::{FormCommand, PickerSurface};
use ratatui::{backend::TestBackend, Terminal};
use stay_tui::app::{reduce, Action, AppState};
use stay_tui::ui;

fn draw(state: &AppState) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn booking_state() -> AppState {
    let state = AppState::new().with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    reduce(state, Action::OpenBooking)
}

#[test]
fn test_hotel_screen_shows_details() {
    let screen = draw(&AppState::new());

    assert!(screen.contains("Golden Sands Beachfront"));
    assert!(screen.contains("$100/night"));
    assert!(screen.contains("Book Now"));
}

#[test]
fn test_form_shows_dates_and_disabled_continue() {
    let screen = draw(&booking_state());

    assert!(screen.contains("Jun 1, 2024"));
    assert!(screen.contains("Select room type"));
    assert!(screen.contains("(accept terms)"));
}

#[test]
fn test_calendar_overlay_shows_month() {
    let state = reduce(
        booking_state(),
        Action::Form(FormCommand::OpenPicker(PickerSurface::CheckIn)),
    );
    let screen = draw(&state);

    assert!(screen.contains("June 2024"));
    assert!(screen.contains("Su Mo Tu We Th Fr Sa"));
}

#[test]
fn test_room_list_overlay() {
    let state = reduce(
        booking_state(),
        Action::Form(FormCommand::OpenPicker(PickerSurface::RoomType)),
    );
    let screen = draw(&state);

    assert!(screen.contains("> Standard"));
    assert!(screen.contains("Presidential Suite"));
}

#[test]
fn test_confirmation_screen_lists_summary() {
    let state = reduce(booking_state(), Action::Form(FormCommand::ToggleTerms));
    let state = reduce(state, Action::Submit);
    let screen = draw(&state);

    assert!(screen.contains("Reservation details received"));
    assert!(screen.contains("Reference"));
    assert!(screen.contains("Golden Sands Beachfront"));
}

#[test]
fn test_help_overlay_renders() {
    let state = reduce(AppState::new(), Action::ShowHelp);
    let screen = draw(&state);

    assert!(screen.contains("Keyboard Shortcuts"));
}
