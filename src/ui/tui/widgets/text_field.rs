//! Single-line text field widget (state entry and name search)

use crate::ui::tui::state::TextField;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered text field that shows the cursor while focused
pub struct TextFieldWidget<'a> {
    field: &'a TextField,
    title: &'a str,
    placeholder: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TextFieldWidget<'a> {
    /// Create a new text field widget
    #[must_use]
    pub const fn new(field: &'a TextField, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            field,
            title,
            placeholder: "",
            theme,
            focused: false,
        }
    }

    /// Text shown while the field is empty
    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(format!(" {} ", self.title));

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));

        let spans = if self.field.text.is_empty() {
            let mut spans = Vec::with_capacity(2);
            if self.focused {
                spans.push(cursor);
            }
            spans.push(Span::styled(self.placeholder, self.theme.dimmed_style()));
            spans
        } else if self.focused {
            let (before, after) = self.field.text.split_at(self.field.cursor);
            vec![Span::raw(before), cursor, Span::raw(after)]
        } else {
            vec![Span::raw(self.field.text.as_str())]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
