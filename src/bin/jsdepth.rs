// src/bin/jsdepth.rs
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jsdepth_core::cli::{self, Cli};
use jsdepth_core::exit::JsDepthExit;

fn main() -> JsDepthExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            JsDepthExit::Error
        }
    }
}

// RUST_LOG wins over --verbose.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
