//! Log file setup
//!
//! The TUI owns the terminal, so log output goes to a file under the user's
//! local data directory. `RUST_LOG` overrides the configured filter.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::{FocusError, Result, APP_NAME, LOG_FILE};

/// Standard log file path: $DATA_LOCAL_DIR/focusgate/focusgate.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| {
        FocusError::LoggingError("Unable to determine data directory".to_string())
    })?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the filter, preferring RUST_LOG when set
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(env) if !env.trim().is_empty() => EnvFilter::try_new(env),
        _ => EnvFilter::try_new(directive),
    };
    filter.map_err(|e| FocusError::LoggingError(format!("Invalid log filter: {}", e)))
}

/// Install the global subscriber writing to `path`
pub fn init_file_logging(path: &Path, directive: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FocusError::LoggingError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            FocusError::LoggingError(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })?;
    let filter = build_filter(directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| FocusError::LoggingError(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

/// Install logging at the standard location
pub fn init(directive: &str) -> Result<PathBuf> {
    let path = log_file_path()?;
    init_file_logging(&path, directive)?;
    Ok(path)
}
