//! Help bar widget for displaying keybind hints

use crate::ui::tui::state::Focus;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "TAB", "Space")
    pub key: &'static str,
    /// Action description (e.g., "next", "toggle")
    pub action: &'static str,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints relevant to the focused control
#[must_use]
pub fn hints_for(focus: Focus, panel_shown: bool) -> Vec<KeyHint> {
    let mut hints = match focus {
        Focus::StateInput => vec![KeyHint::new("Enter", "search state")],
        Focus::Search => vec![KeyHint::new("type", "filter by name")],
        Focus::TypeSelect => vec![KeyHint::new("←/→", "change type")],
        Focus::Cities => vec![
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("Space", "toggle"),
            KeyHint::new("c", "clear all"),
        ],
        Focus::Results => vec![
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("o", "visit website"),
        ],
    };
    if panel_shown {
        hints.push(KeyHint::new("TAB", "next"));
        hints.push(KeyHint::new("^R", "reset filters"));
    }
    hints.push(KeyHint::new("F1", "help"));
    hints.push(KeyHint::new("ESC", "quit"));
    hints
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
