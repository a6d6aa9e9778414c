// src/cli/mod.rs
//! Command-line front end.

pub mod args;

use std::io::Read;

use anyhow::{Context, Result};

pub use args::Cli;

use crate::config::Config;
use crate::exit::JsDepthExit;
use crate::reporting;
use crate::scan::{self, Scanner};
use crate::types::ScanReport;

/// Resolves configuration, scores the requested inputs and prints the report.
///
/// # Errors
/// Returns error if the configuration is invalid or stdin cannot be read.
pub fn run(cli: &Cli) -> Result<JsDepthExit> {
    let config = resolve_config(cli)?;
    let scanner = Scanner::new(config.score_options());
    let report = collect_report(cli, &config, &scanner, &mut std::io::stdin())?;
    reporting::print_report(&report, cli.format)?;
    Ok(JsDepthExit::from(&report))
}

/// Scores `--eval`, or stdin followed by the files under the other paths.
fn collect_report(
    cli: &Cli,
    config: &Config,
    scanner: &Scanner,
    stdin: &mut dyn Read,
) -> Result<ScanReport> {
    if let Some(snippet) = &cli.eval {
        return Ok(scanner.score_source("<eval>", snippet));
    }
    let mut report = ScanReport::default();
    let from_stdin = cli.reads_stdin();
    if from_stdin {
        let mut source = String::new();
        stdin
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        report = report.merge(scanner.score_source("<stdin>", &source));
    }
    let files = scan::discover(&cli.file_paths(), &config.scan.extensions);
    if files.is_empty() {
        if !from_stdin {
            anyhow::bail!("no JavaScript files found");
        }
        return Ok(report);
    }
    Ok(report.merge(scanner.scan(&files)))
}

/// File values first, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::load()?,
    };
    if cli.trace {
        config.scan.trace = true;
    }
    if let Some(limit) = cli.max_nesting {
        config.limits.max_nesting = limit;
    }
    config.validate()?;
    Ok(config)
}
