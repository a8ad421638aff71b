//! Domain-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures during scan and title extraction. All of these are fatal
/// for the run: no partial index is ever emitted.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("cannot read directory {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path} as text: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
