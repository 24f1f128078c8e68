//! Top-level command for xstub.
//!
//! Wires the pipeline together: walk the tree, classify every directory for
//! the run's mode, then apply (or report) the stub operation per directory.
//!
//! # Behavior
//!
//! - Without `--dryrun`: creates or deletes stubs and prints a summary
//! - With `--dryrun`: prints one `would ...` line per directory, changes nothing
//! - Per-directory failures are reported but do not fail the run
//! - An unreadable directory anywhere in the tree aborts before any change

mod summary;


use crate::apply::{ApplyReport, apply};
use crate::classify::filter_eligible;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::settings::RunSettings;
use crate::walk::walk_tree;

use summary::print_report;

/// Execute xstub for parsed CLI arguments.
pub fn cmd_run(cli: &Cli) -> Result<()> {
    let settings = cli.settings();
    let config = Config::discover(&settings.root, cli.config.as_deref())?;

    let report = run(&settings, &config)?;
    print_report(&report, &settings)
}

/// Run the walk → classify → apply pipeline.
pub fn run(settings: &RunSettings, config: &Config) -> Result<ApplyReport> {
    tracing::info!(
        root = %settings.root.display(),
        mode = %settings.mode,
        dry_run = settings.dry_run,
        "starting run"
    );

    let folders = walk_tree(&settings.root, config)?;
    let eligible = filter_eligible(&folders, settings.mode, config)?;

    apply(&eligible, settings, config)
}
