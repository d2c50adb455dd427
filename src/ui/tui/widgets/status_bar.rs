//! Status bar widget for displaying messages

use crate::session::{DirectorySession, Phase};
use crate::ui::output::MessageLevel;
use crate::ui::tui::state::StatusMessage;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget: latest message on the left, session summary on the right
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    session: &'a DirectorySession,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        messages: &'a [&'a StatusMessage],
        session: &'a DirectorySession,
        theme: &'a Theme,
    ) -> Self {
        Self {
            messages,
            session,
            theme,
        }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
        }
    }

    /// Right-hand summary, e.g. "texas · 12/40 · filtered"
    fn summary(&self) -> String {
        if self.session.is_loading()
            && let Some(pending) = self.session.current_state()
        {
            return format!("{pending} · loading…");
        }
        let Some(state) = self.session.loaded_state() else {
            return String::from("no state loaded");
        };
        let mut summary = format!(
            "{state} · {}/{}",
            self.session.visible().len(),
            self.session.dataset().len()
        );
        if self.session.phase() == Phase::Filtered {
            summary.push_str(" · filtered");
        }
        summary
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        if let Some(msg) = self.messages.last() {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        Paragraph::new(Line::styled(self.summary(), self.theme.info_style()))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
