//! Brewtour - browse breweries by US state
//!
//! This library fetches breweries for a US state from the Open Brewery DB API
//! and keeps a filterable view over them (brewery type, city, name search).
//! The interactive terminal frontend lives in [`ui::tui`]; the filtering core
//! in [`filters`] and [`session`] has no UI dependencies.

use thiserror::Error;

pub mod api;
pub mod brewery;
pub mod cli;
pub mod config;
pub mod fetcher;
pub mod filters;
pub mod logging;
pub mod output;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use brewery::{Brewery, BreweryId, BreweryType};
pub use filters::{FilterState, apply_filters, city_index};
pub use session::{DirectorySession, Phase, RequestToken};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BrewError {
    /// Remote API error
    #[error("API error: {0}")]
    ApiError(#[from] api::ApiError),
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Output serialization error
    #[error("Output error: {0}")]
    OutputError(String),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
