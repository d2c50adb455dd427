//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The system browser could not be launched
    #[error("Failed to open {url}: {reason}")]
    OpenError { url: String, reason: String },

    /// User input prompt failed
    #[error("Failed to read input: {0}")]
    InputError(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
