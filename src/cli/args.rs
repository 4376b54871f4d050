//! CLI argument definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "levrank")]
#[command(about = "Rank lines by Levenshtein edit distance to a query word")]
#[command(version)]
pub struct Cli {
    /// Word to compare every line against
    pub query: String,

    /// File with one candidate per line (reads standard input if omitted)
    pub file: Option<PathBuf>,

    /// Ignore case when comparing
    #[arg(short = 'i', long, overrides_with = "no_ignore_case")]
    pub ignore_case: bool,

    /// Compare case-sensitively even if the config file says otherwise
    #[arg(long, overrides_with = "ignore_case")]
    pub no_ignore_case: bool,

    /// Tab-separated substitution rules applied to each line before comparing
    #[arg(short = 's', long, value_name = "PATH")]
    pub substitutions: Option<PathBuf>,

    /// Treat substitution patterns as regular expressions
    #[arg(long, overrides_with = "no_regex_rules")]
    pub regex_rules: bool,

    /// Treat substitution patterns literally even if the config file says otherwise
    #[arg(long, overrides_with = "regex_rules")]
    pub no_regex_rules: bool,

    /// Sort from least to most similar
    #[arg(short = 'r', long, overrides_with = "no_reverse")]
    pub reverse: bool,

    /// Sort from most to least similar even if the config file says otherwise
    #[arg(long, overrides_with = "reverse")]
    pub no_reverse: bool,

    /// Print a similarity score (1 - distance/max) instead of the distance
    #[arg(short = 'n', long, overrides_with = "no_scale")]
    pub scale: bool,

    /// Print distances even if the config file asks for scores
    #[arg(long, overrides_with = "scale")]
    pub no_scale: bool,

    /// Separator between value and line
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Custom configuration file path
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level implied by the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
