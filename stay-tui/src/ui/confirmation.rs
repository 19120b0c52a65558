//! Confirmation screen shown after hand-off

use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::fg;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(confirmation) = state.confirmation.as_ref() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Reservation details received",
            fg(state, Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(confirmation.summary_rows().into_iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), fg(state, Color::Cyan)),
            Span::raw(value),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from("Press Enter to return to the hotel"));

    let summary =
        Paragraph::new(lines).block(Block::default().title(" Confirmation ").borders(Borders::ALL));
    frame.render_widget(summary, area);
}
