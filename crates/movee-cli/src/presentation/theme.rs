//! Colors and text styles for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Ratatui theme shared by all widgets.
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn movee(&self) -> Style {
        Style::default().bg(Color::Yellow).fg(Color::Black)
    }

    pub fn container(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Trailing padding strip the box may not enter.
    pub fn padding(&self) -> Style {
        Style::default().bg(Color::DarkGray)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(Color::LightGreen)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::LightRed),
        }
    }
}
