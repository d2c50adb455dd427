//! Brewery type selector widget

use crate::brewery::BreweryType;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shows the selected type with ◀ ▶ markers while focused
pub struct TypeSelector<'a> {
    selected: Option<&'a BreweryType>,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TypeSelector<'a> {
    /// Create a new type selector widget
    #[must_use]
    pub const fn new(selected: Option<&'a BreweryType>, theme: &'a Theme) -> Self {
        Self {
            selected,
            theme,
            focused: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TypeSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(" Type of Brewery ");

        let inner = block.inner(area);
        block.render(area, buf);

        let (label, style) = match self.selected {
            Some(t) => (t.label(), self.theme.badge_style()),
            None => ("Any type".to_string(), self.theme.dimmed_style()),
        };

        let mut spans = Vec::with_capacity(3);
        if self.focused {
            spans.push(Span::styled("◀ ", self.theme.cursor_style()));
        }
        spans.push(Span::styled(label, style));
        if self.focused {
            spans.push(Span::styled(" ▶", self.theme.cursor_style()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
