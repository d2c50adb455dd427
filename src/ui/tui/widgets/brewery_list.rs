//! Result list widget for the visible breweries

use crate::brewery::Brewery;
use crate::ui::tui::state::ListCursor;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// List of breweries with a cursor row
pub struct BreweryList<'a> {
    /// Visible subset
    breweries: &'a [Brewery],
    /// Size of the full dataset (for the title)
    total: usize,
    cursor: ListCursor,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> BreweryList<'a> {
    /// Create a new brewery list widget
    #[must_use]
    pub const fn new(
        breweries: &'a [Brewery],
        total: usize,
        cursor: ListCursor,
        theme: &'a Theme,
    ) -> Self {
        Self {
            breweries,
            total,
            cursor,
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

    /// Render a single brewery row
    fn render_item(&self, brewery: &'a Brewery, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let name_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(brewery.name.as_str(), name_style),
            Span::raw("  "),
            Span::styled(format!("[{}]", brewery.brewery_type), self.theme.badge_style()),
            Span::raw("  "),
            Span::styled(brewery.city.as_str(), self.theme.dimmed_style()),
        ]);

        ListItem::new(line)
    }
}

impl Widget for BreweryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" List of Breweries ({}/{}) ", self.breweries.len(), self.total);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.breweries.is_empty() {
            Line::styled("No breweries match", self.theme.dimmed_style()).render(inner, buf);
            return;
        }

        let start = self.cursor.scroll;
        let end = (start + inner.height as usize).min(self.breweries.len());

        let items: Vec<ListItem> = (start..end)
            .map(|idx| {
                let is_cursor = self.focused && idx == self.cursor.cursor;
                self.render_item(&self.breweries[idx], is_cursor)
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
