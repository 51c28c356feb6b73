//! File-backed tracing setup.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Routes all tracing output to `<log_root>/<session_id>/client.log`.
///
/// Stdout belongs to the command prompt, so nothing is written to the
/// terminal. The returned guard flushes the writer when dropped and must be
/// held for the lifetime of the process.
pub fn setup_logging(log_root: Option<&Path>, session_id: Option<&str>) -> Result<WorkerGuard> {
    let log_root = log_root.map(Path::to_path_buf).unwrap_or_else(default_log_directory);
    let session_id = session_id.map(str::to_owned).unwrap_or_else(generated_session_id);

    let session_log_dir = log_root.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("failed to create log directory {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(guard)
}

fn generated_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

/// Platform cache directory for the market, falling back to the system
/// temp dir when no home directory can be resolved.
///
/// - macOS: `~/Library/Caches/market/logs`
/// - Linux: `~/.cache/market/logs` (or `$XDG_CACHE_HOME/market/logs`)
/// - Windows: `%LOCALAPPDATA%\market\cache\logs`
fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "market")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("market").join("logs"))
}
