//! Package identifier resolution.
//!
//! Every real source file in a directory votes for the identifier on its
//! first declaration line; the identifier with the most votes is used for the
//! stub. Files that cannot be read are skipped with a warning.

mod scan;
mod vote;


use crate::classify::Listing;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

pub use scan::{declared_identifier, identifier_from_file};
pub use vote::Tally;

/// Resolve the identifier to write into a stub for `dir`.
///
/// Returns an empty string when no source file declares one.
pub fn resolve_identifier(dir: &Path, config: &Config) -> Result<String> {
    let listing = Listing::read(dir)?;
    let mut tally = Tally::default();

    for name in listing.real_sources(config) {
        let path = dir.join(name);
        match identifier_from_file(&path, config) {
            Ok(Some(id)) => tally.add(id),
            Ok(None) => {
                tracing::debug!(path = %path.display(), "no declaration found");
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "unable to read package from source file, skipping"
                );
            }
        }
    }

    match tally.winner() {
        Some(id) => Ok(id.to_string()),
        None => {
            tracing::warn!(
                dir = %dir.display(),
                "no {} declaration found, stub will have an empty identifier",
                config.declaration_keyword
            );
            Ok(String::new())
        }
    }
}
