//! CLI command implementation

use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};

use crate::corpus::load_corpus;
use crate::ranking::Ranker;
use crate::substitution::SubstitutionRules;

use super::args::Cli;
use super::paths::{toggle, PersistentConfig};

/// Execute a ranking run, writing records to standard output
pub fn execute(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    match execute_to(cli, writer) {
        Err(e) if is_broken_pipe(&e) => {
            tracing::debug!("stdout closed early");
            Ok(())
        }
        other => other,
    }
}

/// Execute a ranking run, writing records to `writer`
///
/// Every input is loaded before the first record is written, so a failure
/// never leaves partial output behind.
pub fn execute_to<W: Write>(cli: Cli, writer: W) -> Result<()> {
    let config = resolve_config(&cli)?;
    let options = config.rank_options();

    let rules = match &config.substitutions {
        Some(path) => Some(
            SubstitutionRules::load(path, options.case_fold, config.match_mode())
                .context("Failed to load substitution rules")?,
        ),
        None => None,
    };

    let corpus = load_corpus(cli.file.as_deref()).context("Failed to load corpus")?;

    let ranking = Ranker::new(options).rank(&cli.query, corpus, rules.as_ref());

    ranking
        .write_to(writer, config.separator())
        .context("Failed to write results")?;

    Ok(())
}

/// Merge the config file with command-line flags
pub fn resolve_config(cli: &Cli) -> Result<PersistentConfig> {
    let config = PersistentConfig::load_from(cli.config.clone())?;

    let cli_overrides = PersistentConfig {
        ignore_case: toggle(cli.ignore_case, cli.no_ignore_case),
        substitutions: cli.substitutions.clone(),
        regex_rules: toggle(cli.regex_rules, cli.no_regex_rules),
        reverse: toggle(cli.reverse, cli.no_reverse),
        scale: toggle(cli.scale, cli.no_scale),
        separator: cli.separator.clone(),
    };

    Ok(config.merge_with_cli(&cli_overrides))
}

fn is_broken_pipe(error: &anyhow::Error) -> bool {
    error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
