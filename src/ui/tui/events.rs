//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to state changes. Anything that has to
//! leave the state (starting a fetch, launching a browser) is returned as an
//! [`EventResult`] for the run loop to carry out.

use super::state::{BrowserState, Focus, Mode};
use crate::session::RequestToken;
use crate::ui::output::MessageLevel;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Start a fetch for the given state under the given token
    Fetch(RequestToken, String),
    /// Open a website in the system browser
    OpenWebsite(String),
    /// Exit the browser
    Quit,
    /// No action taken
    Ignored,
}

/// Handle a key press
pub fn handle_key(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    if state.mode == Mode::Help {
        // Any key closes help
        state.mode = Mode::Normal;
        return EventResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            return EventResult::Quit;
        }
        (KeyCode::Tab, _) => {
            state.focus_next();
            return EventResult::Continue;
        }
        (KeyCode::BackTab, _) => {
            state.focus_prev();
            return EventResult::Continue;
        }
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            return EventResult::Continue;
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            state.reset_filters();
            return EventResult::Continue;
        }
        _ => {}
    }

    match state.focus {
        Focus::StateInput => handle_state_input(state, key),
        Focus::Search => handle_search(state, key),
        Focus::TypeSelect => handle_type_select(state, key),
        Focus::Cities => handle_cities(state, key),
        Focus::Results => handle_results(state, key),
    }
}

/// Shared editing keys for text fields. Returns `Some(changed)` if handled.
fn edit_text(field: &mut super::state::TextField, key: KeyEvent) -> Option<bool> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            let changed = !field.text.is_empty();
            field.clear();
            Some(changed)
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            let before = field.text.len();
            field.delete_word();
            Some(field.text.len() != before)
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            field.push(c);
            Some(true)
        }
        (KeyCode::Backspace, _) => Some(field.backspace()),
        (KeyCode::Delete, _) => Some(field.delete()),
        (KeyCode::Left, _) => {
            field.left();
            Some(false)
        }
        (KeyCode::Right, _) => {
            field.right();
            Some(false)
        }
        (KeyCode::Home, _) => {
            field.cursor = 0;
            Some(false)
        }
        (KeyCode::End, _) => {
            field.cursor = field.text.len();
            Some(false)
        }
        _ => None,
    }
}

fn handle_state_input(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Enter {
        let (token, name) = state.submit_state();
        return EventResult::Fetch(token, name);
    }
    match edit_text(&mut state.state_input, key) {
        Some(_) => EventResult::Continue,
        None => EventResult::Ignored,
    }
}

fn handle_search(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Enter {
        state.focus = Focus::Results;
        return EventResult::Continue;
    }
    match edit_text(&mut state.search_input, key) {
        Some(true) => {
            state.sync_search();
            EventResult::Continue
        }
        Some(false) => EventResult::Continue,
        None => EventResult::Ignored,
    }
}

fn handle_type_select(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ' | 'l' | 'j') => {
            state.cycle_type(true);
            EventResult::Continue
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
            state.cycle_type(false);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_cities(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    let len = state.session.city_index().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.cities.up(),
        KeyCode::Down | KeyCode::Char('j') => state.cities.down(len),
        KeyCode::PageUp => state.cities.page_up(),
        KeyCode::PageDown => state.cities.page_down(len),
        KeyCode::Home => state.cities.home(),
        KeyCode::End => state.cities.end(len),
        KeyCode::Char(' ') | KeyCode::Enter => state.toggle_city_at_cursor(),
        KeyCode::Char('c') => state.clear_cities(),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

fn handle_results(state: &mut BrowserState, key: KeyEvent) -> EventResult {
    let len = state.session.visible().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.results.up(),
        KeyCode::Down | KeyCode::Char('j') => state.results.down(len),
        KeyCode::PageUp => state.results.page_up(),
        KeyCode::PageDown => state.results.page_down(len),
        KeyCode::Home | KeyCode::Char('g') => state.results.home(),
        KeyCode::End | KeyCode::Char('G') => state.results.end(len),
        KeyCode::Enter | KeyCode::Char('o') => return open_current(state),
        KeyCode::Char('?') => state.mode = Mode::Help,
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

fn open_current(state: &mut BrowserState) -> EventResult {
    let Some(brewery) = state.current_brewery() else {
        return EventResult::Ignored;
    };
    match brewery.website_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => EventResult::OpenWebsite(url.to_string()),
        None => {
            let text = format!("{} has no website", brewery.name);
            state.add_message(MessageLevel::Warning, text);
            EventResult::Continue
        }
    }
}

/// Handle mouse events (wheel scrolls the result list)
fn handle_mouse(state: &mut BrowserState, mouse: MouseEvent) -> EventResult {
    let len = state.session.visible().len();
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.results.up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.results.down(len);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut BrowserState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
