//! Message panel: recent connection diagnostics, newest last.

use client_frontend_core::{MessageEntry, MessageLog};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::DashTheme;

pub fn render(frame: &mut Frame, area: Rect, log: &MessageLog, theme: &DashTheme) {
    let visible = area.height.saturating_sub(2) as usize;

    let mut entries: Vec<&MessageEntry> = log.recent(visible).collect();
    entries.reverse();

    let lines: Vec<Line> = entries
        .into_iter()
        .map(|entry| {
            let mut spans = Vec::new();
            if let Some(stamp) = entry.timestamp {
                spans.push(Span::styled(
                    format!("[{}] ", stamp.format("%H:%M:%S")),
                    theme.style_label(),
                ));
            }
            spans.push(Span::styled(
                entry.text.as_str(),
                theme.style_message(entry.level),
            ));
            Line::from(spans)
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));
    frame.render_widget(paragraph, area);
}
