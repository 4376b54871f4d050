//! Configuration directory and persistent settings

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::ranking::{RankOptions, DEFAULT_SEPARATOR};
use crate::substitution::MatchMode;

/// Get the configuration directory for levrank
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("levrank"))
}

/// Get the default config file path
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// User configuration stored in config file
///
/// Every field is optional: a missing field falls back to the built-in
/// default, and command-line flags override whatever the file says.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Compare case-insensitively
    pub ignore_case: Option<bool>,
    /// Default substitution rules file
    pub substitutions: Option<PathBuf>,
    /// Interpret substitution patterns as regular expressions
    pub regex_rules: Option<bool>,
    /// Sort from least to most similar
    pub reverse: Option<bool>,
    /// Print similarity scores instead of distances
    pub scale: Option<bool>,
    /// Output separator
    pub separator: Option<String>,
}

impl PersistentConfig {
    /// Load configuration from a custom path, or from the default location
    ///
    /// A custom path must exist. The default file is optional.
    pub fn load_from(custom_path: Option<PathBuf>) -> Result<Self> {
        let path = match custom_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file does not exist: {}", path.display());
                }
                path
            }
            None => match config_file_path() {
                Ok(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        Self::read(&path)
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, cli: &PersistentConfig) -> Self {
        Self {
            ignore_case: cli.ignore_case.or(self.ignore_case),
            substitutions: cli
                .substitutions
                .clone()
                .or_else(|| self.substitutions.clone()),
            regex_rules: cli.regex_rules.or(self.regex_rules),
            reverse: cli.reverse.or(self.reverse),
            scale: cli.scale.or(self.scale),
            separator: cli.separator.clone().or_else(|| self.separator.clone()),
        }
    }

    /// Options for the ranking pipeline
    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            case_fold: self.ignore_case.unwrap_or(false),
            reverse: self.reverse.unwrap_or(false),
            scale: self.scale.unwrap_or(false),
        }
    }

    /// How substitution patterns are matched
    pub fn match_mode(&self) -> MatchMode {
        if self.regex_rules.unwrap_or(false) {
            MatchMode::Regex
        } else {
            MatchMode::Literal
        }
    }

    /// Effective output separator
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }
}

/// Map a `--flag` / `--no-flag` pair to a config override.
///
/// Neither set leaves the config file's value in place.
pub(crate) fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
