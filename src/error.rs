//! Error types for storekeep
//!
//! Uses `thiserror` for library errors. Per-item deletion failures are not
//! errors in this sense: they are data in the bulk report. This enum covers
//! the failures that abort an operation before it starts (bad configuration,
//! unusable root set).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for storekeep operations
pub type StorekeepResult<T> = Result<T, StorekeepError>;

/// Main error type for storekeep operations
#[derive(Error, Debug)]
pub enum StorekeepError {
    /// Configuration file could not be read
    #[error("cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// No allowed roots configured
    #[error("no allowed roots configured - add at least one [[roots]] entry")]
    NoRoots,

    /// A root entry has an empty logical name
    #[error("allowed root with empty name (backing path '{path}')")]
    EmptyRootName { path: PathBuf },

    /// A root entry's logical name contains a path separator or dot segment
    #[error("invalid root name '{name}': {message}")]
    InvalidRootName { name: String, message: String },

    /// Two root entries share a logical name
    #[error("duplicate allowed root '{name}'")]
    DuplicateRoot { name: String },

    /// A root entry's backing path is not absolute
    #[error("backing path for root '{name}' must be absolute, got '{path}'")]
    RelativeRootPath { name: String, path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
