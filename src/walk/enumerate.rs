//! Immediate subdirectory listing with hidden and duplicate filtering.

use crate::config::Config;
use crate::error::{Result, StubError};
use globset::GlobSet;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists subdirectories for one walk, remembering every directory it has
/// already handed out (by canonical path) so symlinks to an already-listed
/// directory are dropped. Symlinks resolving outside the root are dropped too.
#[derive(Debug)]
pub struct Enumerator<'a> {
    config: &'a Config,
    root: PathBuf,
    canonical_root: PathBuf,
    exclude: GlobSet,
    seen: HashSet<PathBuf>,
}

impl<'a> Enumerator<'a> {
    /// Create an enumerator for a walk rooted at `root`.
    ///
    /// Fails with a traversal error if the root does not resolve.
    pub fn new(root: &Path, config: &'a Config) -> Result<Self> {
        let canonical_root = root
            .canonicalize()
            .map_err(|e| StubError::traversal(root, e))?;

        let mut seen = HashSet::new();
        seen.insert(canonical_root.clone());

        Ok(Self {
            config,
            root: root.to_path_buf(),
            canonical_root,
            exclude: config.exclude_set()?,
            seen,
        })
    }

    /// List the immediate child directories of `dir`, sorted by name.
    ///
    /// Entries whose name starts with the hidden prefix, entries matching an
    /// `exclude` glob, symlinks resolving outside the walk root, and
    /// directories already returned earlier in the walk are skipped.
    pub fn subdirs(&mut self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| StubError::traversal(dir, e))?;

        let mut children: Vec<(OsString, PathBuf)> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StubError::traversal(dir, e))?;
            let name = entry.file_name();

            if name
                .to_string_lossy()
                .starts_with(self.config.hidden_prefix.as_str())
            {
                continue;
            }

            // is_dir follows symlinks; dangling links report false
            let path = entry.path();
            if path.is_dir() {
                children.push((name, path));
            }
        }
        children.sort_by(|a, b| a.0.cmp(&b.0));

        let mut subs = Vec::with_capacity(children.len());
        for (_, path) in children {
            if self.is_excluded(&path) {
                tracing::debug!(path = %path.display(), "excluded by config");
                continue;
            }

            let canonical = path
                .canonicalize()
                .map_err(|e| StubError::traversal(&path, e))?;
            if !canonical.starts_with(&self.canonical_root) {
                tracing::debug!(path = %path.display(), target = %canonical.display(), "skipping link outside the root");
                continue;
            }
            if !self.seen.insert(canonical) {
                tracing::debug!(path = %path.display(), "skipping already listed directory");
                continue;
            }

            subs.push(path);
        }

        Ok(subs)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }

        match path.strip_prefix(&self.root) {
            Ok(rel) => self.exclude.is_match(relative_key(rel)),
            Err(_) => false,
        }
    }
}

/// Render a relative path with `/` separators for glob matching.
fn relative_key(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
