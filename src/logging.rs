//! Diagnostic logging to a file; the terminal belongs to the UI.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Log file name inside the configured log directory.
pub const LOG_FILE: &str = "uavconf.log";

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory or file could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber is already installed.
    #[error("could not install log subscriber: {0}")]
    Subscriber(String),
}

/// Returns the log file path for `dir`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

/// Installs a global subscriber appending to `{dir}/uavconf.log`.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Returns the log
/// file path.
pub fn init(dir: &Path) -> Result<PathBuf, LoggingError> {
    fs::create_dir_all(dir)?;
    let path = log_file_path(dir);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_path_joins_name() {
        assert_eq!(
            log_file_path(Path::new("/var/log/uav")),
            Path::new("/var/log/uav/uavconf.log")
        );
    }

    #[test]
    fn init_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let path = init(&nested).unwrap();
        assert!(path.exists());
        assert_eq!(path, nested.join(LOG_FILE));

        let second = init(&nested);
        assert!(matches!(second, Err(LoggingError::Subscriber(_))));
    }
}
