//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The TUI owns the terminal, so in interactive mode logs go to a file.
//! Non-interactive commands log to stderr.
//!
//! The filter comes from `BREWTOUR_LOG` when set, otherwise from the
//! configured `log_level`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "BREWTOUR_LOG";

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error (non-interactive commands)
    Stderr,
    /// Append to a file (TUI)
    File(&'a Path),
}

/// Build the filter from `BREWTOUR_LOG` or fall back to `default_level`
#[must_use]
pub fn build_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber
///
/// Safe to call more than once; later calls are ignored. A log file that
/// cannot be opened disables logging rather than failing the program.
pub fn init_logging(default_level: &str, target: LogTarget<'_>) {
    let filter = build_env_filter(default_level);

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && fs::create_dir_all(parent).is_err()
            {
                return;
            }
            let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
                return;
            };
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        // Must not panic on a malformed directive
        let filter = build_env_filter("not a [valid directive");
        let _ = filter.to_string();
    }

    #[test]
    fn test_file_target_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("brewtour.log");
        init_logging("debug", LogTarget::File(&path));
        assert!(path.parent().unwrap().exists());
    }
}
