//! Configuration for a terminal session and its log file.

use std::path::PathBuf;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "termpoints.log";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file. Truncated when logging starts.
    pub path: PathBuf,
    /// Record debug events (every point registration and removal).
    pub debug: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            debug: false,
        }
    }
}

/// Configuration for [`run`](crate::run) and the crossterm backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Hide the hardware cursor unless a capture loop shows it.
    pub hide_cursor: bool,
    /// Install the file logger before the session starts.
    pub log: Option<LogConfig>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
            log: Some(LogConfig::default()),
        }
    }
}
