//! Error types for progress storage
//!
//! The game itself never fails on storage errors: `GameStore` logs and
//! falls back to defaults. These types exist for the layers underneath.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing stored values
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error on a specific file or directory
    #[error("IO error during {operation} of {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The temp file could not replace the target
    #[error("Atomic write to {path} failed: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    /// The platform has no data directory
    #[error("No data directory available on this platform")]
    NoDataDir,

    /// Keys become file names, so path separators and the like are refused
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
