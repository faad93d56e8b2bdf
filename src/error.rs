//! Error types for Wiser
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::ApplyError;
use crate::domain::ports::StoreError;
use crate::domain::value_objects::{EnvironmentError, ItemKind};

/// Result type alias for Wiser operations
pub type WiserResult<T> = Result<T, WiserError>;

/// Main error type for Wiser operations
#[derive(Error, Debug)]
pub enum WiserError {
    /// Environment token is not `test`, `accept` or `live`
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    /// Item has never been versioned
    #[error("{kind} {id} does not exist")]
    UnknownItem { kind: ItemKind, id: u64 },

    /// Item exists but lacks the requested version
    #[error("{kind} {id} has no version {version}")]
    UnknownVersion { kind: ItemKind, id: u64, version: u32 },

    /// Item already holds version `u32::MAX`
    #[error("{kind} {id} has no version numbers left")]
    VersionOverflow { kind: ItemKind, id: u64 },

    /// Deltas could not be applied to the stored versions
    #[error("cannot apply publish: {0}")]
    Apply(#[from] ApplyError),

    /// Store could not be read or written
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid configuration file
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WiserError {
    /// True for errors caused by the request rather than the stored state
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            WiserError::Environment(_)
                | WiserError::UnknownItem { .. }
                | WiserError::UnknownVersion { .. }
        )
    }
}
