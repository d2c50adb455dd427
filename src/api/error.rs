//! API error types

use thiserror::Error;

/// Errors that can occur while talking to the brewery API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server could not be reached
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request timed out
    #[error("Request timeout")]
    Timeout,

    /// Any other transport-level failure
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a brewery list
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::ConnectionFailed(e.to_string())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
