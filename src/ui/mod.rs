//! User interface layer
//!
//! - [`output`] - status messages for the non-interactive commands
//! - [`tui`] - the interactive ratatui directory browser
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   DirectorySession + FetchWorker        │
//! │   (dataset, predicates, visible set)    │
//! └────────────────┬────────────────────────┘
//!                  │ read-only while drawing
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │   tui::BrowserApp                       │
//! │   (focus, cursors, input buffers)       │
//! └────────────────┬────────────────────────┘
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │   Ratatui     │  │    Crossterm      │
//! │  (widgets)    │  │    (events)       │
//! └───────────────┘  └───────────────────┘
//! ```

mod error;

pub mod output;
pub mod tui;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};

/// Open a URL in the system browser
///
/// # Errors
///
/// Returns `UiError::OpenError` if no browser could be launched.
pub fn open_website(url: &str) -> Result<()> {
    open::that_detached(url).map_err(|e| UiError::OpenError {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Ask for a US state on the terminal
///
/// The answer is returned exactly as typed.
///
/// # Errors
///
/// Returns `UiError::InputError` if the prompt cannot be shown or read.
pub fn prompt_state() -> Result<String> {
    use dialoguer::{Input, theme::ColorfulTheme};

    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Which state are you visiting?")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| UiError::InputError(e.to_string()))
}
