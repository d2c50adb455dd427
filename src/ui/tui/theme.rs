//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for the cursor indicator and focused borders
    pub cursor: Color,
    /// Color for success messages and checked boxes
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages and links
    pub info: Color,
    /// Color for unfocused borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for brewery type badges
    pub badge: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            badge: Color::Magenta,
        }
    }

    /// Style for the highlighted row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for checked checkboxes
    #[must_use]
    pub fn checked_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for website links
    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.info)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Border style, depending on focus
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            self.cursor_style()
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for brewery type badges
    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.badge)
    }

    /// Style for section headings
    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}
