//! Core error types for studyquest-core.
//!
//! This module defines the error hierarchy using thiserror. Engine
//! operations report business-rule outcomes through [`ActionError`];
//! everything touching the filesystem goes through [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for studyquest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence-related errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Rejected engine operations
    #[error("Action rejected: {0}")]
    Action(#[from] ActionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The serialized store task stopped
    #[error(transparent)]
    Closed(#[from] StoreClosed),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised while reading or writing the state document.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The document could not be read
    #[error("Failed to read state document at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document was read but its shape did not match
    #[error("Failed to decode state document at {path}: {source}")]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot could not be serialized
    #[error("Failed to encode snapshot: {0}")]
    EncodeFailed(#[source] serde_json::Error),

    /// The document could not be written
    #[error("Failed to write state document to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value outside its permitted range
    #[error("'{field}' must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },

    /// Required text was empty
    #[error("'{0}' must not be empty")]
    Empty(&'static str),
}

/// Why an engine operation left the snapshot untouched.
///
/// Every variant implies no state was modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The referenced entity is not in the snapshot
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    /// Not enough coins for a purchase
    #[error("Insufficient funds: need {needed} coins, have {available}")]
    InsufficientFunds { needed: u32, available: u32 },

    /// The entity exists but is not in a claimable/usable state
    #[error("Not eligible: {reason}")]
    NotEligible { reason: String },

    /// Theme must be unlocked before it can be applied
    #[error("Theme {0} is locked")]
    Locked(Uuid),

    /// Operation input failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// The store task is no longer running.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("store task has shut down")]
pub struct StoreClosed;

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
