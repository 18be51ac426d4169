//! Header widget: connection status, game clock, day/night, last update.

use client_frontend_core::DisplaySet;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::DashTheme;

pub fn render(frame: &mut Frame, area: Rect, set: &DisplaySet, theme: &DashTheme) {
    let indicator = if set.connected { "●" } else { "○" };
    let day_night = if set.daytime { "Day" } else { "Night" };

    let text = vec![Line::from(vec![
        Span::styled(indicator, theme.style_status(set.connected)),
        Span::raw(" "),
        Span::raw(set.status_text.as_str()),
        Span::raw(" | Clock: "),
        Span::styled(set.clock_text.as_str(), Style::default().fg(Color::Yellow)),
        Span::raw(" ("),
        Span::raw(day_night),
        Span::raw(")"),
        Span::raw(" | Updated: "),
        Span::styled(set.last_update_text.as_str(), theme.style_label()),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Telemetry"));

    frame.render_widget(paragraph, area);
}
