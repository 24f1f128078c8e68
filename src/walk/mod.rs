//! Breadth-first directory tree walking.
//!
//! The walker grows a single list of directories: it starts with the root and
//! enumerates the children of every collected entry in turn, appending what it
//! finds, until no new directories appear. Parents therefore always precede
//! their own children.
//!
//! There is no depth bound. Symlinked directories are followed, and the only
//! protection against a symlink cycle is the enumerator's canonical-path
//! de-duplication.

mod enumerate;

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub use enumerate::Enumerator;

/// Collect `root` and every directory beneath it, breadth-first.
///
/// Any directory that cannot be listed aborts the walk with
/// [`StubError::Traversal`](crate::error::StubError::Traversal).
pub fn walk_tree(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut enumerator = Enumerator::new(root, config)?;
    let mut folders = vec![root.to_path_buf()];

    let mut next = 0;
    while next < folders.len() {
        let dir = folders[next].clone();
        let subs = enumerator.subdirs(&dir)?;
        folders.extend(subs);
        next += 1;
    }

    tracing::debug!(root = %root.display(), count = folders.len(), "walked tree");
    Ok(folders)
}
