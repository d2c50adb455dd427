//! Application state for the ratatui TUI
//!
//! Wraps the [`DirectorySession`] with the purely visual state: which control
//! has focus, text field contents, list cursors and status messages. Nothing
//! here duplicates session data; checkbox state, the selected type and the
//! visible list are always read from the session.

use crate::brewery::{Brewery, BreweryType};
use crate::fetcher::FetchOutcome;
use crate::session::{DirectorySession, FetchApplied, RequestToken};
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Control that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// US state entry field
    #[default]
    StateInput,
    /// Live name search
    Search,
    /// Brewery type selector
    TypeSelect,
    /// City checklist
    Cities,
    /// Result list
    Results,
}

impl Focus {
    const ORDER: [Self; 5] = [
        Self::StateInput,
        Self::Search,
        Self::TypeSelect,
        Self::Cities,
        Self::Results,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next control in tab order
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control in tab order
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Single-line editable text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// Current text
    pub text: String,
    /// Cursor position as a byte offset on a char boundary
    pub cursor: usize,
}

impl TextField {
    /// Insert a character at the cursor
    pub fn push(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor. Returns `false` if nothing changed.
    pub fn backspace(&mut self) -> bool {
        let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() else {
            return false;
        };
        self.text.remove(idx);
        self.cursor = idx;
        true
    }

    /// Delete the character under the cursor. Returns `false` if nothing changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Move the cursor one character left
    pub fn left(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Move the cursor one character right
    pub fn right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Delete the word before the cursor
    pub fn delete_word(&mut self) {
        let trimmed = self.text[..self.cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |i| i + 1);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Clear the text
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Cursor and scroll offset for a list of known length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Highlighted row
    pub cursor: usize,
    /// First visible row
    pub scroll: usize,
    /// Rows visible at once (set during render)
    pub height: usize,
}

impl ListCursor {
    /// Move up one row
    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.adjust_scroll();
    }

    /// Move down one row within `len`
    pub fn down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
        self.adjust_scroll();
    }

    /// Move up one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.height.max(1));
        self.adjust_scroll();
    }

    /// Move down one page within `len`
    pub fn page_down(&mut self, len: usize) {
        self.cursor = (self.cursor + self.height.max(1)).min(len.saturating_sub(1));
        self.adjust_scroll();
    }

    /// Jump to the first row
    pub fn home(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to the last row
    pub fn end(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll = self.scroll.min(self.cursor);
        self.adjust_scroll();
    }

    /// Back to the top
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Adjust scroll offset to keep cursor visible
    fn adjust_scroll(&mut self) {
        let height = self.height.max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }
}

/// Options offered by the type selector; `None` means any type
pub const TYPE_OPTIONS: [Option<BreweryType>; 4] = [
    None,
    Some(BreweryType::Micro),
    Some(BreweryType::Regional),
    Some(BreweryType::Brewpub),
];

/// Application state for the directory browser
#[derive(Debug)]
pub struct BrowserState {
    /// Dataset, predicates and derived lists
    pub session: DirectorySession,
    /// Control with keyboard focus
    pub focus: Focus,
    /// Current UI mode
    pub mode: Mode,
    /// State name being typed
    pub state_input: TextField,
    /// Name search being typed
    pub search_input: TextField,
    /// Cursor in the city checklist
    pub cities: ListCursor,
    /// Cursor in the result list
    pub results: ListCursor,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserState {
    /// Create state for a pristine session
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: DirectorySession::new(),
            focus: Focus::StateInput,
            mode: Mode::Normal,
            state_input: TextField::default(),
            search_input: TextField::default(),
            cities: ListCursor::default(),
            results: ListCursor::default(),
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        }
    }

    /// Move focus forward; stays on the state field until the panel is shown
    pub fn focus_next(&mut self) {
        if self.session.shows_results_panel() {
            self.focus = self.focus.next();
        }
    }

    /// Move focus backward; stays on the state field until the panel is shown
    pub fn focus_prev(&mut self) {
        if self.session.shows_results_panel() {
            self.focus = self.focus.prev();
        }
    }

    /// Submit the state field, issuing a request token for the fetch
    ///
    /// The text is submitted as typed.
    pub fn submit_state(&mut self) -> (RequestToken, String) {
        let state = self.state_input.text.clone();
        let token = self.session.begin_fetch(state.clone());
        self.add_message(MessageLevel::Info, format!("Loading breweries for '{state}'..."));
        (token, state)
    }

    /// Apply a finished fetch to the session
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let state = outcome.state;
        match self.session.complete_fetch(outcome.token, outcome.result) {
            FetchApplied::Replaced(count) => {
                self.results.reset();
                self.cities.clamp(self.session.city_index().len());
                self.add_message(
                    MessageLevel::Success,
                    format!("Loaded {count} breweries for '{state}'"),
                );
            }
            FetchApplied::Failed(e) => {
                self.add_message(
                    MessageLevel::Error,
                    format!("Could not load breweries for '{state}': {e}"),
                );
            }
            FetchApplied::Stale => {}
        }
    }

    /// Push the search field into the name predicate
    pub fn sync_search(&mut self) {
        self.session.set_name_query(self.search_input.text.clone());
        self.results.clamp(self.session.visible().len());
    }

    /// Step the type selector forward or backward
    pub fn cycle_type(&mut self, forward: bool) {
        let current = self.session.filter().brewery_type.clone();
        let idx = TYPE_OPTIONS
            .iter()
            .position(|opt| *opt == current)
            .unwrap_or(0);
        let len = TYPE_OPTIONS.len();
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        self.session.set_type(TYPE_OPTIONS[next].clone());
        self.results.clamp(self.session.visible().len());
    }

    /// City under the checklist cursor
    #[must_use]
    pub fn city_at_cursor(&self) -> Option<&str> {
        self.session
            .city_index()
            .get(self.cities.cursor)
            .map(String::as_str)
    }

    /// Toggle the city under the checklist cursor
    pub fn toggle_city_at_cursor(&mut self) {
        if let Some(city) = self.city_at_cursor().map(str::to_string) {
            self.session.toggle_city(&city);
            self.results.clamp(self.session.visible().len());
        }
    }

    /// Deselect every city
    pub fn clear_cities(&mut self) {
        self.session.clear_cities();
        self.results.clamp(self.session.visible().len());
    }

    /// Drop every predicate, including the search text
    pub fn reset_filters(&mut self) {
        self.search_input.clear();
        self.session.reset_filter();
        self.results.clamp(self.session.visible().len());
    }

    /// Brewery under the result cursor
    #[must_use]
    pub fn current_brewery(&self) -> Option<&Brewery> {
        self.session.visible().get(self.results.cursor)
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
        if self.messages.len() > 100 {
            self.messages.drain(0..50);
        }
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_dataset, texas_dataset};

    fn loaded_state() -> BrowserState {
        let mut state = BrowserState::new();
        state.state_input.text = "texas".to_string();
        let (token, name) = state.submit_state();
        state.apply_outcome(FetchOutcome {
            token,
            state: name,
            result: Ok(texas_dataset()),
        });
        state
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::default();
        for c in "new york".chars() {
            field.push(c);
        }
        assert_eq!(field.text, "new york");

        field.left();
        field.left();
        assert!(field.backspace());
        assert_eq!(field.text, "new yrk");

        field.right();
        assert!(field.delete());
        assert_eq!(field.text, "new yr");

        field.delete_word();
        assert_eq!(field.text, "new ");
        assert_eq!(field.cursor, 4);
    }

    #[test]
    fn test_text_field_multibyte() {
        let mut field = TextField::default();
        field.push('é');
        field.push('x');
        field.left();
        field.left();
        assert_eq!(field.cursor, 0);
        field.right();
        assert_eq!(field.cursor, 'é'.len_utf8());
        assert!(field.backspace());
        assert_eq!(field.text, "x");
        assert!(!field.backspace());
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::StateInput.next(), Focus::Search);
        assert_eq!(Focus::Results.next(), Focus::StateInput);
        assert_eq!(Focus::StateInput.prev(), Focus::Results);
    }

    #[test]
    fn test_focus_locked_while_pristine() {
        let mut state = BrowserState::new();
        state.focus_next();
        assert_eq!(state.focus, Focus::StateInput);

        let mut state = loaded_state();
        state.focus_next();
        assert_eq!(state.focus, Focus::Search);
    }

    #[test]
    fn test_list_cursor_scrolls() {
        let mut list = ListCursor {
            height: 3,
            ..ListCursor::default()
        };
        for _ in 0..5 {
            list.down(10);
        }
        assert_eq!(list.cursor, 5);
        assert_eq!(list.scroll, 3);

        list.clamp(2);
        assert_eq!(list.cursor, 1);
        assert!(list.scroll <= list.cursor);

        list.end(0);
        assert_eq!(list.cursor, 0);
    }

    #[test]
    fn test_type_cycle_wraps() {
        let mut state = loaded_state();
        state.cycle_type(true);
        assert_eq!(state.session.filter().brewery_type, Some(BreweryType::Micro));
        state.cycle_type(false);
        assert_eq!(state.session.filter().brewery_type, None);
        state.cycle_type(false);
        assert_eq!(state.session.filter().brewery_type, Some(BreweryType::Brewpub));
    }

    #[test]
    fn test_city_toggle_and_clear() {
        let mut state = loaded_state();
        // City index: Austin, Dallas, Houston
        state.toggle_city_at_cursor();
        state.cities.down(state.session.city_index().len());
        state.toggle_city_at_cursor();
        assert_eq!(state.session.filter().selected_cities.len(), 2);

        state.clear_cities();
        assert!(state.session.filter().selected_cities.is_empty());
        assert_eq!(state.session.visible().len(), state.session.dataset().len());
    }

    #[test]
    fn test_search_sync_clamps_results() {
        let mut state = loaded_state();
        state.results.end(state.session.visible().len());

        for c in "jester".chars() {
            state.search_input.push(c);
        }
        state.sync_search();

        assert_eq!(state.session.visible().len(), 1);
        assert_eq!(state.results.cursor, 0);
        assert_eq!(
            state.current_brewery().map(|b| b.name.as_str()),
            Some("Jester King Brewery")
        );
    }

    #[test]
    fn test_failed_fetch_reports_error() {
        let mut state = loaded_state();
        state.state_input.text = "ohio".to_string();
        let (token, name) = state.submit_state();
        state.apply_outcome(FetchOutcome {
            token,
            state: name,
            result: Err(crate::api::ApiError::Timeout),
        });

        let last = state.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Error);
        assert_eq!(state.session.dataset(), texas_dataset());
    }

    #[test]
    fn test_reset_filters_clears_search_text() {
        let mut state = loaded_state();
        state.search_input.push('a');
        state.sync_search();
        state.cycle_type(true);

        state.reset_filters();

        assert!(state.search_input.text.is_empty());
        assert!(!state.session.filter().is_active());
    }

    #[test]
    fn test_stale_outcome_is_silent() {
        let mut state = BrowserState::new();
        state.state_input.text = "texas".into();
        let (old, _) = state.submit_state();
        let (new, _) = state.submit_state();
        let before = state.messages.len();

        state.apply_outcome(FetchOutcome {
            token: old,
            state: "texas".into(),
            result: Ok(sample_dataset()),
        });
        assert_eq!(state.messages.len(), before);
        assert!(state.session.dataset().is_empty());

        state.apply_outcome(FetchOutcome {
            token: new,
            state: "texas".into(),
            result: Ok(sample_dataset()),
        });
        assert_eq!(state.session.dataset().len(), 3);
    }
}
