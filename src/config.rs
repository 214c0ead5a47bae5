//! Runtime configuration: where requests go and where logs are written.

use std::path::{Path, PathBuf};

use crate::client::DEFAULT_ENDPOINT;

/// Directory name used under the platform data directory.
const APP_DIR: &str = "uavconf";

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a local data directory.
    #[error("could not determine local data directory")]
    NoDataDir,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    endpoint: String,
    log_dir: PathBuf,
}

impl Config {
    /// Default endpoint, logs under `{data_local_dir}/uavconf/`.
    pub fn new() -> Result<Self, ConfigError> {
        let base = dirs::data_local_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(Self::with_paths(DEFAULT_ENDPOINT, base.join(APP_DIR)))
    }

    /// Explicit endpoint and log directory.
    pub fn with_paths(endpoint: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            endpoint: endpoint.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Returns the calculation endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the directory the log file lives in.
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_paths_stores_both() {
        let config = Config::with_paths("http://localhost:8000/configure", "/tmp/uav");
        assert_eq!(config.endpoint(), "http://localhost:8000/configure");
        assert_eq!(config.log_dir(), Path::new("/tmp/uav"));
    }

    #[test]
    fn new_uses_default_endpoint_and_app_dir() {
        // Platforms without a data dir are covered by the NoDataDir variant.
        if let Ok(config) = Config::new() {
            assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
            assert!(config.log_dir().ends_with(APP_DIR));
        }
    }
}
