//! Persistence gateway for the snapshot document.
//!
//! The whole snapshot is written as one JSON document on every save. There
//! is no schema version: a document that no longer decodes is replaced by
//! the seed on the next load.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::{data_dir, seed, Config, Snapshot};
use crate::error::{ConfigError, PersistenceError};

/// Durable home of the snapshot.
///
/// Implementations never keep a reference to the live snapshot; `save`
/// serializes a copy of whatever it is handed.
pub trait SnapshotStore: Send {
    /// Read the stored document. `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<Snapshot>, PersistenceError>;

    /// Overwrite the stored document with `snapshot`.
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;

    /// Stored snapshot, or the seed when it is absent or unreadable.
    fn load(&self, now: DateTime<Utc>) -> Snapshot {
        match self.read() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                tracing::debug!("no state document, using seed");
                seed::default_snapshot(now)
            }
            Err(e) => {
                tracing::warn!(error = %e, "state document unreadable, falling back to seed");
                seed::default_snapshot(now)
            }
        }
    }
}

/// JSON file on local disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/<storage.state_file>`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(data_dir()?.join(&config.storage.state_file)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn read(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| PersistenceError::DecodeFailed {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes to a sibling temp file and renames it over the document, so a
    /// failed write never leaves a truncated document behind.
    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let data = serde_json::to_vec_pretty(snapshot).map_err(PersistenceError::EncodeFailed)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, &data).map_err(|source| PersistenceError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| PersistenceError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = data.len(), "snapshot saved");
        Ok(())
    }
}

/// In-memory document, encoded as JSON like the file store.
///
/// Clones share the same document. Writes can be made to fail for
/// exercising error paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw document, valid or not.
    pub fn with_document(document: impl Into<String>) -> Self {
        let store = Self::default();
        *store.lock_document() = Some(document.into());
        store
    }

    pub fn document(&self) -> Option<String> {
        self.lock_document().clone()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) = fail;
    }

    fn lock_document(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.document.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> Result<Option<Snapshot>, PersistenceError> {
        match self.lock_document().as_deref() {
            None => Ok(None),
            Some(doc) => serde_json::from_str(doc)
                .map(Some)
                .map_err(|source| PersistenceError::DecodeFailed {
                    path: PathBuf::from("<memory>"),
                    source,
                }),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        if *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(PersistenceError::WriteFailed {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        let doc = serde_json::to_string(snapshot).map_err(PersistenceError::EncodeFailed)?;
        *self.lock_document() = Some(doc);
        Ok(())
    }
}
