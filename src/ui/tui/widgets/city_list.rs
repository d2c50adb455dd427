//! City checklist widget
//!
//! Checkbox state is read from the selected-city set on every render, so
//! clearing the selection needs no separate visual reset.

use crate::filters::FilterState;
use crate::ui::tui::state::ListCursor;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Checklist of the cities in the current dataset
pub struct CityList<'a> {
    cities: &'a [String],
    filter: &'a FilterState,
    cursor: ListCursor,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> CityList<'a> {
    /// Create a new city list widget
    #[must_use]
    pub const fn new(
        cities: &'a [String],
        filter: &'a FilterState,
        cursor: ListCursor,
        theme: &'a Theme,
    ) -> Self {
        Self {
            cities,
            filter,
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

    fn render_city(&self, city: &'a str, is_cursor: bool) -> ListItem<'a> {
        let checked = self.filter.is_city_selected(city);
        let checkbox = if checked { "[x]" } else { "[ ]" };
        let cursor_char = if is_cursor { ">" } else { " " };

        let text_style = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };
        let box_style = if checked {
            self.theme.checked_style()
        } else {
            self.theme.dimmed_style()
        };

        ListItem::new(Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(checkbox, box_style),
            Span::raw(" "),
            Span::styled(city, text_style),
        ]))
    }
}

impl Widget for CityList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = self.filter.selected_cities.len();
        let title = if selected == 0 {
            " Cities ".to_string()
        } else {
            format!(" Cities ({selected} selected) ")
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(title)
            .title_bottom(Line::styled(" c: clear all ", self.theme.dimmed_style()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let start = self.cursor.scroll;
        let end = (start + inner.height as usize).min(self.cities.len());

        let items: Vec<ListItem> = (start..end)
            .map(|idx| {
                let is_cursor = self.focused && idx == self.cursor.cursor;
                self.render_city(&self.cities[idx], is_cursor)
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(cities: &[String], filter: &FilterState) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        CityList::new(cities, filter, ListCursor::default(), &theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_checkboxes_follow_selection() {
        let cities = vec!["Austin".to_string(), "Dallas".to_string()];
        let mut filter = FilterState::default();
        filter.select_city("Dallas");

        let buf = render(&cities, &filter);
        assert!(row_text(&buf, 1).contains("[ ] Austin"));
        assert!(row_text(&buf, 2).contains("[x] Dallas"));

        filter.clear_cities();
        let buf = render(&cities, &filter);
        assert!(row_text(&buf, 1).contains("[ ] Austin"));
        assert!(row_text(&buf, 2).contains("[ ] Dallas"));
    }
}
