//! Run report output: the dry-run plan and the end-of-run summary.
//!
//! A reader that closes stdout early (`xstub -d | head`) ends the report
//! quietly. Any other write failure is an error.

use crate::apply::ApplyReport;
use crate::error::{Result, StubError};
use crate::settings::{Mode, RunSettings};
use std::io::{self, Write};

/// Print the run report to stdout.
pub fn print_report(report: &ApplyReport, settings: &RunSettings) -> Result<()> {
    let mut out = io::stdout().lock();
    finish_output(write_report(&mut out, report, settings))
}

/// Write the `would ...` lines (dry-run only) followed by the summary.
pub(super) fn write_report<W: Write>(
    out: &mut W,
    report: &ApplyReport,
    settings: &RunSettings,
) -> io::Result<()> {
    if settings.dry_run {
        for action in &report.planned {
            writeln!(out, "{}", action)?;
        }
    }
    for line in summary_lines(report, settings) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

pub(super) fn finish_output(result: io::Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed, report truncated");
            Ok(())
        }
        Err(e) => Err(StubError::Output(e)),
    }
}

pub(super) fn summary_lines(report: &ApplyReport, settings: &RunSettings) -> Vec<String> {
    let mut lines = Vec::new();

    if report.planned.is_empty() {
        lines.push("No eligible directories found.".to_string());
        return lines;
    }

    if settings.dry_run {
        lines.push("Dry-run mode: no changes made.".to_string());
        return lines;
    }

    let verb = match settings.mode {
        Mode::Stub => "Stubbed",
        Mode::Unstub => "Unstubbed",
    };
    lines.push(format!(
        "{} {} {}",
        verb,
        report.applied.len(),
        directories(report.applied.len())
    ));

    if report.has_failures() {
        lines.push(format!("Failed: {} item(s)", report.failures.len()));
        for (path, reason) in &report.failures {
            lines.push(format!("  - {}: {}", path.display(), reason));
        }
    }

    lines
}

fn directories(count: usize) -> &'static str {
    if count == 1 { "directory" } else { "directories" }
}
