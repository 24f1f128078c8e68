//! Data types for applying stubs.

use std::fmt;
use std::path::{Path, PathBuf};

/// The filesystem change planned for one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubAction {
    /// Write a stub declaring `identifier`.
    Create { path: PathBuf, identifier: String },
    /// Remove an existing stub.
    Delete { path: PathBuf },
}

impl StubAction {
    /// Path of the stub file this action touches.
    pub fn path(&self) -> &Path {
        match self {
            StubAction::Create { path, .. } | StubAction::Delete { path } => path,
        }
    }
}

/// Dry-run phrasing, one line per directory.
impl fmt::Display for StubAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StubAction::Create { path, identifier } => write!(
                f,
                "would create {} with identifier {}",
                path.display(),
                identifier
            ),
            StubAction::Delete { path } => write!(f, "would delete {}", path.display()),
        }
    }
}

/// Outcome of applying actions across a directory list.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Every action considered, in walk order.
    pub planned: Vec<StubAction>,
    /// Stub paths actually created or deleted (empty in dry-run).
    pub applied: Vec<PathBuf>,
    /// Stub paths whose operation failed, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

impl ApplyReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
