//! Console output for scan results.
//!
//! Text output is one line per input: the depth, or the failure in red.
//! JSON output serializes the whole [`ScanReport`].

use std::fmt::Write;
use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;

use crate::types::{FileScore, ScanReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints the report to stdout.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}

/// # Errors
/// Returns error if serialization fails.
pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[must_use]
pub fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    for file in &report.files {
        write_file(&mut out, file);
    }
    if report.files.len() > 1 {
        write_summary(&mut out, report);
    }
    out
}

fn write_file(out: &mut String, file: &FileScore) {
    let path = file.path.display().to_string();
    match (file.depth, &file.error) {
        (Some(depth), _) => {
            let _ = writeln!(out, "{} {}", depth.to_string().bold(), path);
        }
        (None, error) => {
            let reason = error.as_deref().unwrap_or("unknown failure");
            let _ = writeln!(out, "{} {}: {}", "error".red().bold(), path, reason.red());
        }
    }
    if let Some(trace) = &file.trace {
        for line in trace.render_indented().lines() {
            let _ = writeln!(out, "  {}", line.dimmed());
        }
    }
}

fn write_summary(out: &mut String, report: &ScanReport) {
    let elapsed = Duration::from_millis(u64::try_from(report.duration_ms).unwrap_or(u64::MAX));
    let scored = report.scored_count();
    let line = format!(
        "{} scored, {} failed in {:?}",
        scored, report.failures, elapsed
    );
    if report.has_failures() {
        let _ = writeln!(out, "{}", line.yellow());
    } else {
        let _ = writeln!(out, "{}", line.green());
    }
}
