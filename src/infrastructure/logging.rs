use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

/// Installs the global `tracing` subscriber, writing to the configured log file.
///
/// The terminal belongs to the UI, so nothing is ever logged to stdout or stderr.
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: &LoggingConfig) -> io::Result<()> {
    if let Some(parent) = config.file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&config.file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}
