//! Error types for loading inputs and substitution rules.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing a ranking run.
///
/// All variants are fatal: they are raised while inputs are loaded, before
/// any record is written.
#[derive(Debug, Error)]
pub enum RankError {
    /// A corpus or substitution-rules source could not be opened or read.
    #[error("cannot read {}: {source}", display_source(.path))]
    InputUnreadable {
        /// Path of the input, or `None` for standard input.
        path: Option<PathBuf>,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A substitution rule line has an unexpected structure.
    ///
    /// The whole rules file is rejected; no partial rule set is returned.
    #[error("malformed substitution rule on line {line}: {reason}")]
    MalformedRule {
        /// 1-based line number in the rules file.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },
}

impl RankError {
    pub(crate) fn unreadable(path: Option<PathBuf>, source: std::io::Error) -> Self {
        Self::InputUnreadable { path, source }
    }
}

fn display_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    }
}

/// A specialized `Result` type for ranking operations.
pub type Result<T> = std::result::Result<T, RankError>;
