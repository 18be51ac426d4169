//! Vitals widget: health, mana, and XP progress bars.

use client_frontend_core::{DisplaySet, PoolView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::presentation::theme::DashTheme;

pub fn render(frame: &mut Frame, area: Rect, set: &DisplaySet, theme: &DashTheme) {
    let block = Block::default().borders(Borders::ALL).title("Vitals");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Health
            Constraint::Length(1), // Mana
            Constraint::Length(1), // XP
        ])
        .split(inner);

    render_pool(frame, rows[0], "HP", &set.health, theme.style_health(set.health.percent));
    render_pool(frame, rows[1], "MP", &set.mana, theme.style_mana(set.mana.percent));

    let xp_label = format!(
        "XP {}% (next: {}, {} to go)",
        set.xp_percent, set.next_level_label, set.xp_remaining_text
    );
    let xp = Gauge::default()
        .gauge_style(theme.style_xp())
        .percent(u16::from(set.xp_percent))
        .label(xp_label);
    frame.render_widget(xp, rows[2]);
}

fn render_pool(frame: &mut Frame, area: Rect, name: &str, pool: &PoolView, style: Style) {
    // The label reports the true value; the bar itself caps at 100%
    // since overheal states can exceed it.
    let label = format!("{name} {} ({}%)", pool.value_text, pool.percent);
    let gauge = Gauge::default()
        .gauge_style(style)
        .percent(pool.percent.min(100) as u16)
        .label(label);
    frame.render_widget(gauge, area);
}
