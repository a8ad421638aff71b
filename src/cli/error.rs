//! CLI-level errors (wraps domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot write index {path}: {source}")]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(e) => match e {
                DomainError::Traversal { .. } => crate::exitcode::IOERR,
                DomainError::Decode { .. } => crate::exitcode::DATAERR,
                DomainError::NotADirectory(_) => crate::exitcode::NOINPUT,
            },
            CliError::WriteIndex { .. } => crate::exitcode::CANTCREAT,
        }
    }
}
