//! Economy widget: rates, gold breakdown, and the buyback panel.

use client_frontend_core::DisplaySet;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::DashTheme;

pub fn render(frame: &mut Frame, area: Rect, set: &DisplaySet, theme: &DashTheme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_gold(frame, columns[0], set, theme);
    render_buyback(frame, columns[1], set, theme);
}

fn render_gold(frame: &mut Frame, area: Rect, set: &DisplaySet, theme: &DashTheme) {
    let gold_style = Style::default().fg(Color::Yellow);

    let lines = vec![
        Line::from(vec![
            Span::styled("GPM: ", theme.style_label()),
            Span::styled(set.gpm_text.as_str(), gold_style),
            Span::styled("  XPM: ", theme.style_label()),
            Span::styled(set.xpm_text.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Net worth: ", theme.style_label()),
            Span::styled(set.net_worth_text.as_str(), gold_style),
        ]),
        Line::from(vec![
            Span::styled("Gold: ", theme.style_label()),
            Span::styled(set.total_gold_text.as_str(), gold_style),
            Span::styled(" (reliable ", theme.style_label()),
            Span::raw(set.reliable_gold_text.as_str()),
            Span::styled(", unreliable ", theme.style_label()),
            Span::raw(set.unreliable_gold_text.as_str()),
            Span::styled(")", theme.style_label()),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Economy"));
    frame.render_widget(paragraph, area);
}

fn render_buyback(frame: &mut Frame, area: Rect, set: &DisplaySet, theme: &DashTheme) {
    let affordable = set.buyback_label.starts_with("Buyback");

    let lines = vec![
        Line::from(vec![
            Span::styled("Cost: ", theme.style_label()),
            Span::raw(set.buyback_cost_text.as_str()),
            Span::styled("  After: ", theme.style_label()),
            Span::raw(set.gold_after_buyback_text.as_str()),
        ]),
        Line::from(Span::styled(
            set.buyback_label.as_str(),
            theme.style_buyback(affordable),
        )),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Buyback"));
    frame.render_widget(paragraph, area);
}
