//! Hero widget: name, level, K/D/A, and the respawn countdown.

use client_frontend_core::DisplaySet;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::DashTheme;

pub fn render(frame: &mut Frame, area: Rect, set: &DisplaySet, theme: &DashTheme) {
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(set.hero_name.as_str(), theme.style_value()),
        Span::raw("  Lv "),
        Span::styled(set.level_text.as_str(), Style::default().fg(Color::Yellow)),
        Span::raw(" → "),
        Span::raw(set.next_level_label.as_str()),
    ]));

    lines.push(Line::from(vec![
        Span::styled("K/D/A: ", theme.style_label()),
        Span::styled(set.kills_text.as_str(), Style::default().fg(Color::Green)),
        Span::raw(" / "),
        Span::styled(set.deaths_text.as_str(), Style::default().fg(Color::Red)),
        Span::raw(" / "),
        Span::styled(set.assists_text.as_str(), Style::default().fg(Color::Cyan)),
    ]));

    // Countdown only appears while the hero is dead.
    if let Some(respawn) = &set.respawn_text {
        lines.push(Line::from(vec![
            Span::styled("Respawn in: ", theme.style_label()),
            Span::styled(
                respawn.as_str(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Hero"));

    frame.render_widget(paragraph, area);
}
