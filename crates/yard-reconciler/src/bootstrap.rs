use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Name of the per-user directory under `$HOME`.
pub const APP_DIR: &str = ".yard-reconciler";
pub const LOG_FILE_NAME: &str = "yard-reconciler.log";

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// `~/.yard-reconciler/`, or `./.yard-reconciler/` without a home directory.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Ensure `~/.yard-reconciler/logs/` exists (including missing parents).
pub fn ensure_directories() -> anyhow::Result<()> {
    std::fs::create_dir_all(app_dir().join("logs"))?;
    Ok(())
}

/// Log file used by the dashboard when `--log-file` is not given.
pub fn default_log_path() -> PathBuf {
    app_dir().join("logs").join(LOG_FILE_NAME)
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to this file.  Required while the dashboard owns the terminal.
    File(PathBuf),
}

/// Map a `--log-level` value to a tracing filter directive.
pub fn level_directive(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Falls back to `"info"` if the level string is not a valid filter.  For
/// [`LogTarget::File`] the returned guard must be held until exit so
/// buffered lines are flushed.
pub fn setup_logging(log_level: &str, target: &LogTarget) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(writer);
            tracing_subscriber::registry().with(filter).with(layer).init();
            Ok(Some(guard))
        }
    }
}

fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(file_name)))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
