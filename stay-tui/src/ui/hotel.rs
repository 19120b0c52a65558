//! Hotel detail screen

use crate::app::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::fg;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let hotel = state.hotel;

    let lines = vec![
        Line::from(Span::styled(
            hotel.name,
            fg(state, Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(hotel.location),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("★ {:.1}", hotel.rating), fg(state, Color::Yellow)),
            Span::raw(format!(" ({} reviews)", hotel.reviews)),
            Span::raw("  "),
            Span::styled(hotel.price_label(), fg(state, Color::Green)),
        ]),
        Line::from(""),
        Line::from(format!("Amenities: {}", hotel.amenities.join(", "))),
        Line::from(""),
        Line::from(hotel.description),
        Line::from(""),
        Line::from(Span::styled(
            "[ Book Now ]  press b",
            fg(state, Color::Green).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let details = Paragraph::new(lines)
        .block(Block::default().title(" Hotel ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}
