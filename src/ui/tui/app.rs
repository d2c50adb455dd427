//! Ratatui directory browser
//!
//! Owns the terminal for the lifetime of the browser and runs the event
//! loop: draw, apply finished fetches, handle one input event, repeat.

use super::events::{EventResult, poll_and_handle};
use super::state::{BrowserState, Focus, Mode};
use super::theme::Theme;
use super::widgets::{
    BreweryList, CityList, DetailsPane, HelpBar, HelpOverlay, StatusBar, TextFieldWidget,
    TypeSelector, hints_for,
};
use crate::fetcher::FetchWorker;
use crate::ui::error::Result;
use crate::ui::open_website;
use crate::ui::output::MessageLevel;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before checking for finished fetches
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive brewery directory
pub struct BrowserApp {
    worker: FetchWorker,
    theme: Theme,
    initial_state: Option<String>,
}

impl BrowserApp {
    /// Create a browser that fetches through `worker`
    #[must_use]
    pub fn new(worker: FetchWorker) -> Self {
        Self {
            worker,
            theme: Theme::default(),
            initial_state: None,
        }
    }

    /// Submit `state` as soon as the browser starts
    #[must_use]
    pub fn with_initial_state(mut self, state: Option<String>) -> Self {
        self.initial_state = state;
        self
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up, drawn or restored.
    pub fn run(&self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal);
        Self::cleanup_terminal()?;
        terminal.show_cursor()?;
        result
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Run the event loop
    fn run_loop(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut state = BrowserState::new();

        if let Some(initial) = &self.initial_state {
            state.state_input.text.clone_from(initial);
            state.state_input.cursor = initial.len();
            let (token, name) = state.submit_state();
            self.worker.spawn(token, &name);
        }

        info!("Browser started");

        while !state.should_exit {
            terminal.draw(|frame| self.render(frame, &mut state))?;

            for outcome in self.worker.drain() {
                state.apply_outcome(outcome);
            }

            match poll_and_handle(&mut state, POLL_INTERVAL)? {
                EventResult::Fetch(token, name) => {
                    self.worker.spawn(token, &name);
                    if state.focus == Focus::StateInput {
                        state.focus = Focus::Search;
                    }
                }
                EventResult::OpenWebsite(url) => {
                    debug!(url = %url, "Opening website");
                    match open_website(&url) {
                        Ok(()) => state.add_message(MessageLevel::Success, format!("Opened {url}")),
                        Err(e) => state.add_message(MessageLevel::Error, e.to_string()),
                    }
                }
                EventResult::Quit => break,
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        info!("Browser closed");
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, state: &mut BrowserState) {
        let theme = &self.theme;
        let area = frame.area();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // State field
                Constraint::Min(5),    // Filters + results
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let state_field = TextFieldWidget::new(
            &state.state_input,
            "Which state are you visiting?",
            theme,
        )
        .placeholder("e.g. Texas")
        .focused(state.focus == Focus::StateInput);
        frame.render_widget(state_field, main_layout[0]);

        if state.session.shows_results_panel() {
            Self::render_panel(frame, state, theme, main_layout[1]);
        } else {
            Self::render_welcome(frame, theme, main_layout[1]);
        }

        let messages = state.active_messages();
        let status_bar = StatusBar::new(&messages, &state.session, theme);
        frame.render_widget(status_bar, main_layout[2]);

        let hints = hints_for(state.focus, state.session.shows_results_panel());
        frame.render_widget(HelpBar::new(&hints, theme), main_layout[3]);

        if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(theme), area);
        }
    }

    /// Render the pristine placeholder
    fn render_welcome(frame: &mut Frame, theme: &Theme, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false))
            .title(" Welcome to Brewery Tours ");
        let text = vec![
            Line::default(),
            Line::styled("Type a US state and press Enter", theme.dimmed_style()),
        ];
        frame.render_widget(
            Paragraph::new(text).block(block).alignment(Alignment::Center),
            area,
        );
    }

    /// Render search, filters, results and details
    fn render_panel(frame: &mut Frame, state: &mut BrowserState, theme: &Theme, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        let filters = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name search
                Constraint::Length(3), // Type selector
                Constraint::Min(3),    // Cities
            ])
            .split(columns[0]);

        let search = TextFieldWidget::new(&state.search_input, "Search Breweries", theme)
            .placeholder("name contains...")
            .focused(state.focus == Focus::Search);
        frame.render_widget(search, filters[0]);

        let selector = TypeSelector::new(state.session.filter().brewery_type.as_ref(), theme)
            .focused(state.focus == Focus::TypeSelect);
        frame.render_widget(selector, filters[1]);

        state.cities.height = filters[2].height.saturating_sub(2) as usize;
        let cities = CityList::new(
            state.session.city_index(),
            state.session.filter(),
            state.cities,
            theme,
        )
        .focused(state.focus == Focus::Cities);
        frame.render_widget(cities, filters[2]);

        let results_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        state.results.height = results_area[0].height.saturating_sub(2) as usize;
        let list = BreweryList::new(
            state.session.visible(),
            state.session.dataset().len(),
            state.results,
            theme,
        )
        .focused(state.focus == Focus::Results);
        frame.render_widget(list, results_area[0]);

        frame.render_widget(DetailsPane::new(state.current_brewery(), theme), results_area[1]);
    }
}
