//! File logging.
//!
//! The library only emits `tracing` events. An application that wants them
//! on disk calls [`init`] (or lets [`run`](crate::run) do it), which
//! truncates the log file and installs a plain-text subscriber.

use crate::config::LogConfig;
use crate::error::{Error, Result};
use std::fs::File;
use std::sync::Mutex;
use tracing::Level;

/// Build a subscriber writing to `config.path`, truncating the file first.
pub fn file_subscriber(config: &LogConfig) -> Result<impl tracing::Subscriber + Send + Sync> {
    let file = File::create(&config.path)?;
    let level = if config.debug { Level::DEBUG } else { Level::INFO };
    Ok(tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .finish())
}

/// Install the file subscriber as the global default.
pub fn init(config: &LogConfig) -> Result<()> {
    let subscriber = file_subscriber(config)?;
    tracing::subscriber::set_global_default(subscriber).map_err(|e| Error::Logging(e.to_string()))
}
