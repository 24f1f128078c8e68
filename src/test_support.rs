use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree built up file by file for tests.
pub(crate) struct FixtureTree {
    temp_dir: TempDir,
}

impl FixtureTree {
    pub(crate) fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub(crate) fn path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root().to_path_buf()
        } else {
            self.root().join(rel)
        }
    }

    /// Create a directory (and its parents) and return its path.
    pub(crate) fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a file (creating parent directories) and return its path.
    pub(crate) fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a Go source file declaring `pkg`.
    pub(crate) fn go_file(&self, rel: &str, pkg: &str) -> PathBuf {
        self.file(rel, &go_source(pkg))
    }
}

pub(crate) fn go_source(pkg: &str) -> String {
    format!("// Package {pkg} does things.\npackage {pkg}\n\nfunc run() {{}}\n")
}

/// Snapshot every entry under `root` (hidden ones included).
///
/// Directories map to `None`, files to their bytes. Keys are `/`-separated
/// paths relative to `root`.
pub(crate) fn snapshot_listing(root: &Path) -> BTreeMap<String, Option<Vec<u8>>> {
    let mut out = BTreeMap::new();
    collect(root, root, &mut out);
    out
}

fn collect(root: &Path, dir: &Path, out: &mut BTreeMap<String, Option<Vec<u8>>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let rel = path
            .strip_prefix(root)
            .unwrap()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if path.is_dir() {
            out.insert(rel, None);
            collect(root, &path, out);
        } else {
            out.insert(rel, Some(fs::read(&path).unwrap()));
        }
    }
}

/// Render paths relative to `root` for compact assertions.
pub(crate) fn relative_names(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            let rel = p.strip_prefix(root).unwrap();
            if rel.as_os_str().is_empty() {
                ".".to_string()
            } else {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            }
        })
        .collect()
}
