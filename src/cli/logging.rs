//! File logging setup.
//!
//! The terminal belongs to the renderer while the game runs, so every log
//! line goes to a file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file name inside the log directory.
pub(crate) const LOG_FILE: &str = "herocrawl.log";

/// Install the file subscriber.
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// until the game ends.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub(crate) fn init(log_dir: Option<&Path>) -> Result<(WorkerGuard, PathBuf)> {
    let dir = log_dir.map_or_else(std::env::temp_dir, Path::to_path_buf);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok((guard, dir.join(LOG_FILE)))
}
