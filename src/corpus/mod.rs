//! Corpus loading.
//!
//! A corpus is the ordered list of candidate lines to rank. Each line keeps
//! its position, which later joins it to its distance.
//!
//! ## Format
//!
//! Plain text, one candidate per line:
//!
//! ```text
//! sitting
//! kitten
//! smitten
//! ```
//!
//! Line terminators (`\n` or `\r\n`) are stripped. Blank lines are kept:
//! they are valid (empty) candidates.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{RankError, Result};

/// Read every line from `reader`, stripping line terminators.
///
/// # Errors
///
/// Returns the I/O error if reading fails or a line is not valid UTF-8.
pub fn read_lines<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let reader = BufReader::new(reader);
    reader
        .lines()
        .map(|line| {
            line.map(|mut l| {
                if l.ends_with('\r') {
                    l.pop();
                }
                l
            })
        })
        .collect()
}

/// Load the corpus from `path`, or from standard input when `path` is `None`.
///
/// # Errors
///
/// [`RankError::InputUnreadable`] if the file cannot be opened or read.
pub fn load_corpus(path: Option<&Path>) -> Result<Vec<String>> {
    load_corpus_from(path, io::stdin().lock())
}

/// Like [`load_corpus`], but reads `fallback` instead of standard input when
/// `path` is `None`. `fallback` is left untouched when a path is given.
///
/// # Errors
///
/// [`RankError::InputUnreadable`] if the file or `fallback` cannot be read.
pub fn load_corpus_from<R: Read>(path: Option<&Path>, fallback: R) -> Result<Vec<String>> {
    let lines = match path {
        Some(path) => {
            let file =
                File::open(path).map_err(|e| RankError::unreadable(Some(path.to_path_buf()), e))?;
            read_lines(file).map_err(|e| RankError::unreadable(Some(path.to_path_buf()), e))?
        }
        None => read_lines(fallback).map_err(|e| RankError::unreadable(None, e))?,
    };

    tracing::debug!(
        lines = lines.len(),
        source = %path.map_or_else(|| "<stdin>".into(), |p| p.display().to_string()),
        "loaded corpus"
    );

    Ok(lines)
}
