//! Snapshot of the files directly inside one directory.

use super::{is_source_file, is_test_file};
use crate::config::Config;
use crate::error::{Result, StubError};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// Names of the non-directory entries of a directory at read time.
///
/// Names are kept as the OS returned them so they can be joined back onto
/// the directory; suffix checks use a lossy UTF-8 view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    files: Vec<OsString>,
}

impl Listing {
    /// Read the immediate file entries of `dir`, sorted by name.
    ///
    /// An unreadable directory is a traversal error.
    pub fn read(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| StubError::traversal(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StubError::traversal(dir, e))?;
            if entry.path().is_dir() {
                continue;
            }
            files.push(entry.file_name());
        }
        files.sort();

        Ok(Self { files })
    }

    #[cfg(test)]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut files: Vec<OsString> = names.into_iter().map(Into::into).collect();
        files.sort();
        Self { files }
    }

    #[cfg(test)]
    pub fn files(&self) -> &[OsString] {
        &self.files
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name)
    }

    /// Source files that are not tests, in name order.
    pub fn real_sources<'a>(&'a self, config: &'a Config) -> impl Iterator<Item = &'a OsStr> + 'a {
        self.files.iter().map(OsString::as_os_str).filter(|name| {
            let name = name.to_string_lossy();
            is_source_file(&name, config) && !is_test_file(&name, config)
        })
    }

    /// At least one source file and no test file. An existing test file
    /// (the stub included) rules the directory out.
    pub fn is_stub_candidate(&self, config: &Config) -> bool {
        let mut has_source = false;
        for name in &self.files {
            let name = name.to_string_lossy();
            if is_test_file(&name, config) {
                return false;
            }
            if is_source_file(&name, config) {
                has_source = true;
            }
        }
        has_source
    }
}
