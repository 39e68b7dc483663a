//! Logging init: append to a log file under the XDG state dir, or stderr.
//!
//! The filter comes from `URLNORM_LOG` (EnvFilter syntax). The `urlnorm`
//! directive also covers the `urlnorm_core` and `urlnorm_cli` targets.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "URLNORM_LOG";

const DEFAULT_FILTER: &str = "warn,urlnorm=info";

/// `~/.local/state/urlnorm/urlnorm.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlnorm")?;
    Ok(xdg_dirs.get_state_home().join("urlnorm").join("urlnorm.log"))
}

/// Filter from `URLNORM_LOG`, falling back to the default when unset or unparseable.
fn env_filter() -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to the state-dir log file.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::debug!("urlnorm logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only. Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
