// src/cli/args.rs
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::reporting::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "jsdepth",
    version,
    about = "Heuristic complexity depth of JavaScript sources"
)]
pub struct Cli {
    /// Files or directories to score; `-` reads stdin
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Score a snippet given on the command line
    #[arg(long, short = 'e', value_name = "SNIPPET", conflicts_with = "paths")]
    pub eval: Option<String>,

    /// Print the visited node kinds
    #[arg(long)]
    pub trace: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Deepest syntax nesting accepted before an input is rejected
    #[arg(long, value_name = "N")]
    pub max_nesting: Option<usize>,

    /// Configuration file (default: ./jsdepth.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// True when a script comes from stdin: no paths, or `-` among them.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.eval.is_none()
            && (self.paths.is_empty() || self.paths.iter().any(|p| is_stdin(p)))
    }

    /// Paths to scan from disk, with `-` left out.
    #[must_use]
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().filter(|p| !is_stdin(p)).cloned().collect()
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
