//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing`; stdout is reserved for the dry-run
//! report and run summary. `RUST_LOG` overrides the level chosen by flags.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given `-v` count and `-q` flag.
pub fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
