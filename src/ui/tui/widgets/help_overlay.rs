//! Help overlay widget for displaying full keybind reference

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> [Line<'static>; 2] {
        [
            Line::default(),
            Line::styled(
                title,
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
        ]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.extend(self.section("  General"));
        lines.push(self.help_line("  TAB / S-TAB", "Next / previous control"));
        lines.push(self.help_line("  Ctrl+R", "Reset all filters"));
        lines.push(self.help_line("  ESC / Ctrl+C", "Quit"));

        lines.extend(self.section("  State & Search fields"));
        lines.push(self.help_line("  Enter", "Load breweries for the state"));
        lines.push(self.help_line("  Ctrl+U", "Clear field"));
        lines.push(self.help_line("  Ctrl+W", "Delete word"));

        lines.extend(self.section("  Filters"));
        lines.push(self.help_line("  ←/→", "Change brewery type"));
        lines.push(self.help_line("  Space", "Toggle city"));
        lines.push(self.help_line("  c", "Clear all cities"));

        lines.extend(self.section("  Results"));
        lines.push(self.help_line("  ↑/↓ PgUp/PgDn", "Move cursor"));
        lines.push(self.help_line("  o / Enter", "Visit website"));

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));

        lines
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<16}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
