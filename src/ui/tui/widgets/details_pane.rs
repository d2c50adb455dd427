//! Details pane for the brewery under the cursor

use crate::brewery::Brewery;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shows type, address, phone and website of one brewery
pub struct DetailsPane<'a> {
    brewery: Option<&'a Brewery>,
    theme: &'a Theme,
}

impl<'a> DetailsPane<'a> {
    #[must_use]
    pub const fn new(brewery: Option<&'a Brewery>, theme: &'a Theme) -> Self {
        Self { brewery, theme }
    }

    fn field(&self, label: &'static str, value: Option<&'a str>) -> Vec<Line<'a>> {
        let value = value.filter(|v| !v.is_empty());
        vec![
            Line::styled(label, self.theme.heading_style()),
            value.map_or_else(
                || Line::styled("  n/a", self.theme.dimmed_style()),
                |v| Line::raw(format!("  {v}")),
            ),
        ]
    }

    fn build_lines(&self, brewery: &'a Brewery) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::styled(brewery.name.as_str(), self.theme.heading_style()),
            Line::styled(brewery.brewery_type.label(), self.theme.badge_style()),
            Line::default(),
            Line::styled("Address:", self.theme.heading_style()),
        ];

        if let Some(street) = brewery.street.as_deref().filter(|s| !s.is_empty()) {
            lines.push(Line::raw(format!("  {street}")));
        }
        let mut city_line = brewery.city.clone();
        if let Some(postal) = brewery.postal_code.as_deref().filter(|p| !p.is_empty()) {
            city_line.push_str(", ");
            city_line.push_str(postal);
        }
        lines.push(Line::styled(format!("  {city_line}"), self.theme.heading_style()));
        lines.push(Line::default());

        lines.extend(self.field("Phone:", brewery.phone.as_deref()));
        lines.push(Line::default());

        match brewery.website_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => {
                lines.push(Line::styled("Website:", self.theme.heading_style()));
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(url, self.theme.link_style()),
                ]));
                lines.push(Line::styled("  o / Enter: visit website", self.theme.dimmed_style()));
            }
            None => lines.extend(self.field("Website:", None)),
        }

        lines
    }
}

impl Widget for DetailsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Details ");

        let lines = match self.brewery {
            Some(brewery) => self.build_lines(brewery),
            None => vec![Line::styled("Nothing selected", self.theme.dimmed_style())],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
