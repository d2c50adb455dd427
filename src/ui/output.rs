//! Output abstraction layer
//!
//! Status messages for the non-interactive commands. The TUI keeps its own
//! message list in the status bar.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use brewtour::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.info("Cities with breweries in Texas:");
/// output.error("Request failed");
/// ```
pub trait OutputWriter {
    /// Write an error message
    fn error(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode everything except errors is suppressed.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StdoutWriter {
    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}
