//! Folder classification.
//!
//! Decides from a directory's immediate file listing whether it should
//! receive a stub (has source files and no tests) or has a stub to remove.
//! Reads are live on every call; nothing is cached.

mod listing;


use crate::config::Config;
use crate::error::Result;
use crate::settings::Mode;
use std::path::{Path, PathBuf};

pub use listing::Listing;

/// True if `dir` holds at least one source file and no test file.
pub fn eligible_for_stub(dir: &Path, config: &Config) -> Result<bool> {
    let listing = Listing::read(dir)?;
    Ok(listing.is_stub_candidate(config))
}

/// True if `dir` holds the reserved stub file (exact, case-sensitive name).
pub fn eligible_for_unstub(dir: &Path, config: &Config) -> Result<bool> {
    let listing = Listing::read(dir)?;
    Ok(listing.contains(&config.stub_filename))
}

/// Keep the directories that qualify for `mode`, preserving order.
pub fn filter_eligible(dirs: &[PathBuf], mode: Mode, config: &Config) -> Result<Vec<PathBuf>> {
    let mut eligible = Vec::new();

    for dir in dirs {
        let keep = match mode {
            Mode::Stub => eligible_for_stub(dir, config)?,
            Mode::Unstub => eligible_for_unstub(dir, config)?,
        };
        if keep {
            eligible.push(dir.clone());
        }
    }

    tracing::debug!(%mode, candidates = dirs.len(), eligible = eligible.len(), "classified directories");
    Ok(eligible)
}

/// True if `name` ends with `suffix`, ignoring ASCII case.
pub fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// True for real source files, test files included.
pub fn is_source_file(name: &str, config: &Config) -> bool {
    ends_with_ignore_case(name, &config.source_suffix)
}

pub fn is_test_file(name: &str, config: &Config) -> bool {
    ends_with_ignore_case(name, &config.test_suffix)
}
