//! Picker overlays: calendar for dates, lists for room type and guests

use crate::app::{AppState, BookingScreen};
use chrono::{Datelike, NaiveDate};
use libstaybook::{GuestCount, PickerSurface, RoomType};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, fg};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState, booking: &BookingScreen) {
    let Some(surface) = booking.form.picker().surface() else {
        return;
    };

    let lines = match surface {
        PickerSurface::CheckIn | PickerSurface::CheckOut => {
            calendar_lines(state, booking.calendar_cursor)
        }
        PickerSurface::RoomType => {
            let labels: Vec<String> = RoomType::ALL.iter().map(|r| r.to_string()).collect();
            list_lines(state, &labels, booking.list_cursor)
        }
        PickerSurface::GuestCount => {
            let labels: Vec<String> = GuestCount::ALL
                .iter()
                .map(|g| match g.get() {
                    1 => "1 guest".to_string(),
                    n => format!("{} guests", n),
                })
                .collect();
            list_lines(state, &labels, booking.list_cursor)
        }
    };

    let popup_area = centered_rect(50, 60, area);
    let title = format!(" Select {} ", surface);
    let picker = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(fg(state, Color::Cyan)),
    );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(picker, popup_area);
}

fn highlight(state: &AppState) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

fn list_lines(state: &AppState, labels: &[String], cursor: usize) -> Vec<Line<'static>> {
    labels
        .iter()
        .enumerate()
        .map(|(row, label)| {
            if row == cursor {
                Line::from(Span::styled(format!("> {}", label), highlight(state)))
            } else {
                Line::from(format!("  {}", label))
            }
        })
        .collect()
}

/// Month grid around `cursor`, weeks starting on Sunday
fn calendar_lines(state: &AppState, cursor: NaiveDate) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            cursor.format("%B %Y").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Su Mo Tu We Th Fr Sa"),
    ];

    let first = cursor.with_day(1).unwrap_or(cursor);
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut week: Vec<Span<'static>> = vec![Span::raw("   "); lead];
    let mut day = first;
    while day.month() == cursor.month() {
        let label = format!("{:>2} ", day.day());
        week.push(if day == cursor {
            Span::styled(label, highlight(state))
        } else {
            Span::raw(label)
        });
        if week.len() == 7 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("Arrows: move | Enter: select | Esc: cancel"));
    lines
}
