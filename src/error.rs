//! Error types for the xstub CLI.
//!
//! Only fatal conditions are represented here. Per-file and per-directory
//! failures are logged and recorded in the apply report instead.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for xstub operations.
#[derive(Error, Debug)]
pub enum StubError {
    /// A directory in the tree could not be listed. Aborts the whole run.
    #[error("failed to read directory '{}': {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be loaded or is invalid.
    #[error("{0}")]
    Config(String),

    /// The report could not be written to stdout.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl StubError {
    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StubError::Traversal {
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StubError::Traversal { .. } => exit_codes::TRAVERSAL_FAILURE,
            StubError::Config(_) => exit_codes::USER_ERROR,
            StubError::Output(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for xstub operations.
pub type Result<T> = std::result::Result<T, StubError>;
