//! Layout composition for the dashboard.
//!
//! Composes the header, hero, vitals, economy, and message widgets into
//! the full terminal UI. All widgets consume the [`DisplaySet`]
//! directly; no widget reaches back into the raw snapshot.

use anyhow::Result;
use client_frontend_core::{DisplaySet, MessageLog};
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{DashTheme, Tui, widgets};

/// Render one frame of the dashboard.
pub fn render(
    terminal: &mut Tui,
    set: &DisplaySet,
    messages: &MessageLog,
    message_panel_height: u16,
) -> Result<()> {
    let theme = DashTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                    // Header
                Constraint::Length(5),                    // Hero
                Constraint::Length(5),                    // Vitals
                Constraint::Length(4),                    // Economy / buyback
                Constraint::Min(message_panel_height),    // Messages
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], set, &theme);
        widgets::hero::render(frame, chunks[1], set, &theme);
        widgets::vitals::render(frame, chunks[2], set, &theme);
        widgets::economy::render(frame, chunks[3], set, &theme);
        widgets::messages::render(frame, chunks[4], messages, &theme);
    })?;

    Ok(())
}
