//! Process-level configuration for the `market` binary.

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory with `items.ron` / `config.toml` overrides.
    pub content_dir: Option<PathBuf>,
    /// Root directory for per-session log folders.
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MARKET_CONTENT_DIR` - Content override directory (default: bundled content)
    /// - `MARKET_LOG_DIR` - Log root (default: platform cache directory)
    /// - `MARKET_SESSION_ID` - Session name used for the log folder (default: timestamp)
    pub fn from_env() -> Self {
        Self {
            content_dir: read_env_path("MARKET_CONTENT_DIR"),
            log_dir: read_env_path("MARKET_LOG_DIR"),
            session_id: env::var("MARKET_SESSION_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
        }
    }
}

fn read_env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
