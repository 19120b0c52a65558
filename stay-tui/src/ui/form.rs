//! Booking form screen

use crate::app::{AppState, FormFocus};
use libstaybook::booking::format_for_display;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::fg;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(booking) = state.booking.as_ref() else {
        return;
    };
    let draft = booking.form.draft();

    let nights = booking.form.nights();
    let stay = match nights {
        n if n < 0 => "check-out is before check-in".to_string(),
        1 => "1 night".to_string(),
        n => format!("{} nights", n),
    };

    let rows = [
        (FormFocus::Name, "Full name", text_value(&draft.guest_name)),
        (
            FormFocus::CheckIn,
            "Check-in",
            format_for_display(draft.check_in),
        ),
        (
            FormFocus::CheckOut,
            "Check-out",
            format!("{}  ({})", format_for_display(draft.check_out), stay),
        ),
        (
            FormFocus::RoomType,
            "Room type",
            draft
                .room_type
                .map_or_else(|| "Select room type".to_string(), |r| r.to_string()),
        ),
        (
            FormFocus::Guests,
            "Guests",
            draft
                .guest_count
                .map_or_else(|| "Select guests".to_string(), |g| g.to_string()),
        ),
        (
            FormFocus::Phone,
            "Phone",
            format!("{} {}", state.country_code, draft.phone_number),
        ),
        (
            FormFocus::Terms,
            "Terms",
            format!(
                "[{}] I accept the terms and conditions",
                if draft.terms_accepted { "x" } else { " " }
            ),
        ),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (focus, label, value) in rows {
        let marker = if booking.focus == focus { "> " } else { "  " };
        let label_style = if booking.focus == focus {
            fg(state, Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<10} ", marker, label), label_style),
            Span::raw(value),
        ]));
        lines.push(Line::from(""));
    }

    let (button_style, button_text) = if booking.form.can_submit() {
        (fg(state, Color::Green).add_modifier(Modifier::BOLD), "[ Continue ]")
    } else {
        (fg(state, Color::DarkGray), "[ Continue ] (accept terms)")
    };
    let marker = if booking.focus == FormFocus::Continue { "> " } else { "  " };
    lines.push(Line::from(vec![
        Span::raw(marker),
        Span::styled(button_text, button_style),
    ]));

    let title = format!(" Book {} ", state.hotel.name);
    let form = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(form, area);
}

fn text_value(text: &str) -> String {
    if text.is_empty() {
        "_".to_string()
    } else {
        text.to_string()
    }
}
