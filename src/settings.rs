//! Immutable settings for a single run.

use std::fmt;
use std::path::PathBuf;

/// Which operation a run performs. A run has exactly one mode, so a
/// directory is never both stubbed and unstubbed in one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create stubs in eligible source directories.
    Stub,
    /// Remove previously created stubs.
    Unstub,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stub => write!(f, "stub"),
            Mode::Unstub => write!(f, "unstub"),
        }
    }
}

/// Settings derived from the command line, built once and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Root of the tree to operate on.
    pub root: PathBuf,
    pub mode: Mode,
    /// Report intended operations without touching the filesystem.
    pub dry_run: bool,
}

impl RunSettings {
    pub fn new(root: impl Into<PathBuf>, mode: Mode, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            mode,
            dry_run,
        }
    }
}
