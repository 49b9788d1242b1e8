mod config;
mod persistence;
pub mod seed;
mod snapshot;

pub use config::{Config, LoggingConfig, StorageConfig, TimerConfig};
pub use persistence::{JsonFileStore, MemoryStore, SnapshotStore};
pub use snapshot::Snapshot;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the directory holding config and state.
///
/// `STUDYQUEST_HOME` wins when set. Otherwise `~/.config/studyquest[-dev]/`,
/// selected by `STUDYQUEST_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("STUDYQUEST_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STUDYQUEST_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studyquest-dev")
            } else {
                base_dir.join("studyquest")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
