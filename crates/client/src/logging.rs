//! Tracing subscriber setup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Installs the global subscriber.
///
/// Logs go to stderr so they never mix with the report on stdout, or to
/// `arena.log` in the log directory when file logging is enabled. The
/// returned guard must be kept alive until exit to flush the file writer.
pub fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if !config.to_file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    }

    let log_dir = config.dir.clone().unwrap_or_else(log_directory);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "arena.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}/arena.log", log_dir.display());
    Ok(Some(guard))
}

/// Platform-specific log directory.
///
/// - Linux: `~/.cache/arena/logs` (or `$XDG_CACHE_HOME/arena/logs`)
/// - macOS: `~/Library/Caches/arena/logs`
/// - Windows: `%LOCALAPPDATA%\arena\cache\logs`
/// - Fallback: `/tmp/arena/logs`
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/arena"))
        .join("logs")
}
