//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Nothing here changes state.

mod confirmation;
mod form;
mod hotel;
mod picker;

use crate::app::{AppState, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the application UI
///
/// This is the main rendering entry point.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    match state.current_screen {
        Screen::HotelDetails => hotel::render(frame, chunks[0], state),
        Screen::BookingForm => form::render(frame, chunks[0], state),
        Screen::Confirmation => confirmation::render(frame, chunks[0], state),
    }

    render_status_bar(frame, chunks[1], state);

    // Picker overlays sit above the form, help above everything
    if let Some(booking) = state.booking.as_ref() {
        if state.current_screen == Screen::BookingForm {
            picker::render(frame, area, state, booking);
        }
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Style with `color` as foreground, or plain when colors are disabled
pub(crate) fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Render status bar with the latest message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.current_screen {
        Screen::HotelDetails => "b: Book | F1: Help | q: Quit",
        Screen::BookingForm if state.can_submit() => {
            "Tab: Next field | Enter: Select | Esc: Back | Continue ready"
        }
        Screen::BookingForm => "Tab: Next field | Enter: Select | Esc: Back | F1: Help",
        Screen::Confirmation => "Enter: Done | q: Quit",
    };

    let message = state.status.message.as_deref().unwrap_or("");

    let lines = vec![Line::from(vec![
        Span::styled(message, fg(state, Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(if message.is_empty() { "" } else { " | " }),
        Span::styled(hints, fg(state, Color::Gray)),
    ])];

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q          - Quit (outside text fields)"),
        Line::from("  Ctrl+C     - Quit"),
        Line::from("  F1         - Toggle help"),
        Line::from(""),
        Line::from("Hotel:"),
        Line::from("  b / Enter  - Book this hotel"),
        Line::from(""),
        Line::from("Booking form:"),
        Line::from("  Tab / Down - Next field"),
        Line::from("  Shift+Tab  - Previous field"),
        Line::from("  Enter      - Open picker / Continue"),
        Line::from("  Space      - Toggle terms"),
        Line::from("  Esc        - Back to hotel"),
        Line::from(""),
        Line::from("Pickers:"),
        Line::from("  Arrows     - Move (calendar: Up/Down by week)"),
        Line::from("  Enter      - Select"),
        Line::from("  Esc        - Cancel"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
