//! CLI argument parsing for xstub.
//!
//! Uses clap derive macros for declarative argument definitions. The parsed
//! arguments are turned into an immutable `RunSettings` before any work starts.

use crate::settings::{Mode, RunSettings};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Create or remove placeholder test files so every source directory has a test.
///
/// Walks DIR breadth-first (skipping hidden directories). In stub mode, each
/// directory with source files but no test files receives a stub test file
/// declaring the directory's package. With --remove, existing stubs are deleted.
#[derive(Parser, Debug)]
#[command(name = "xstub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to operate on.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// List the changes that would be made instead of making them.
    #[arg(short = 'd', long = "dryrun", visible_alias = "dry-run")]
    pub dry_run: bool,

    /// Remove stubs from the directory and its subdirectories.
    #[arg(short = 'r', long)]
    pub remove: bool,

    /// YAML file describing the language profile (default: DIR/.xstub.yaml if present).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn mode(&self) -> Mode {
        if self.remove { Mode::Unstub } else { Mode::Stub }
    }

    pub fn settings(&self) -> RunSettings {
        RunSettings::new(self.dir.clone(), self.mode(), self.dry_run)
    }
}
