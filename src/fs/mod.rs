//! Filesystem primitives used when applying stubs.
//!
//! Failures come back as plain `io::Error`s; the applier decides whether they
//! are fatal (never, for stub writes and deletes).

mod atomic;

pub use atomic::atomic_write;

use std::io;
use std::path::Path;

/// Remove a single stub file.
pub fn remove_stub(path: &Path) -> io::Result<()> {
    std::fs::remove_file(path)
}
