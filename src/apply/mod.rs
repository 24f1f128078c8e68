//! Stub creation and removal.
//!
//! Each directory is handled in isolation: a failed write or delete is logged
//! and recorded, and the remaining directories are still processed. Nothing
//! already applied is rolled back. Dry-run only plans; the caller prints the
//! planned actions.

mod types;


use crate::config::Config;
use crate::error::Result;
use crate::fs::{atomic_write, remove_stub};
use crate::package::resolve_identifier;
use crate::settings::{Mode, RunSettings};
use std::io;
use std::path::{Path, PathBuf};

pub use types::{ApplyReport, StubAction};

/// Build the action for one eligible directory.
///
/// Stub mode resolves the package identifier; unstub mode never reads
/// source files.
pub fn plan_action(dir: &Path, mode: Mode, config: &Config) -> Result<StubAction> {
    let path = dir.join(&config.stub_filename);

    match mode {
        Mode::Stub => Ok(StubAction::Create {
            path,
            identifier: resolve_identifier(dir, config)?,
        }),
        Mode::Unstub => Ok(StubAction::Delete { path }),
    }
}

/// Stub file content: the keyword and identifier on a single line.
pub fn stub_content(identifier: &str, config: &Config) -> String {
    format!("{} {}", config.declaration_keyword, identifier)
}

/// Plan the action for every directory in order and, unless dry-run,
/// carry it out.
pub fn apply(dirs: &[PathBuf], settings: &RunSettings, config: &Config) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    for dir in dirs {
        let action = plan_action(dir, settings.mode, config)?;

        if !settings.dry_run {
            match execute(&action, config) {
                Ok(()) => {
                    tracing::info!(path = %action.path().display(), mode = %settings.mode, "applied");
                    report.applied.push(action.path().to_path_buf());
                }
                Err(e) => {
                    let verb = match action {
                        StubAction::Create { .. } => "write",
                        StubAction::Delete { .. } => "delete",
                    };
                    tracing::warn!(path = %action.path().display(), error = %e, "unable to {}", verb);
                    report
                        .failures
                        .push((action.path().to_path_buf(), format!("unable to {}: {}", verb, e)));
                }
            }
        }

        report.planned.push(action);
    }

    Ok(report)
}

fn execute(action: &StubAction, config: &Config) -> io::Result<()> {
    match action {
        StubAction::Create { path, identifier } => {
            atomic_write(path, stub_content(identifier, config).as_bytes())
        }
        StubAction::Delete { path } => remove_stub(path),
    }
}
