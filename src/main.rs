//! xstub: create or remove placeholder test files across a source tree.
//!
//! This is the main entry point for the `xstub` CLI. It parses arguments,
//! sets up logging, runs the stub pipeline, and maps fatal errors to exit codes.

mod cli;
mod commands;
pub mod apply;
pub mod classify;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod package;
pub mod settings;
pub mod walk;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    match commands::cmd_run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
