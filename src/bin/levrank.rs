//! levrank - rank lines by Levenshtein edit distance to a query word
//!
//! Reads candidates from a file or standard input and prints them from most
//! to least similar, one `<value>,<line>` row per candidate.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use levrank::cli::commands;
use levrank::cli::Cli;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_level());

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
