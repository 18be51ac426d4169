//! Ratatui styling for the dashboard widgets.
//!
//! Colors follow percentage bands the same way a health bar changes
//! color in-game: comfortable, caution, danger.

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Color scheme and styling rules for the terminal dashboard.
pub struct DashTheme;

impl DashTheme {
    pub fn new() -> Self {
        Self
    }

    /// Health bar color by remaining percentage.
    pub fn style_health(&self, percent: u32) -> Style {
        let color = match percent {
            75.. => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };
        Style::default().fg(color)
    }

    /// Mana bar color by remaining percentage.
    pub fn style_mana(&self, percent: u32) -> Style {
        let color = match percent {
            75.. => Color::Cyan,
            50..=74 => Color::Blue,
            25..=49 => Color::LightBlue,
            _ => Color::DarkGray,
        };
        Style::default().fg(color)
    }

    /// XP progress bar style.
    pub fn style_xp(&self) -> Style {
        Style::default().fg(Color::Magenta)
    }

    /// Status indicator style for the connection flag.
    pub fn style_status(&self, connected: bool) -> Style {
        if connected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    }

    /// Style for the buyback availability badge.
    pub fn style_buyback(&self, affordable: bool) -> Style {
        if affordable {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::LightRed)
        }
    }

    /// Message color by severity.
    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    /// Dim style for field labels.
    pub fn style_label(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Emphasized style for headline values (hero name, K/D/A).
    pub fn style_value(&self) -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }
}

impl Default for DashTheme {
    fn default() -> Self {
        Self::new()
    }
}
