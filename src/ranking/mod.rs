//! Rank corpus lines by edit distance to a query.
//!
//! The pipeline is:
//!
//! 1. normalize each line into a candidate (case-fold, then substitutions),
//! 2. compute the distance from the query to every candidate,
//! 3. sort `(distance, line)` pairs together by distance,
//! 4. optionally rescale distances into a similarity score,
//! 5. emit `<value><separator><original line>` records.
//!
//! Distances and lines travel together as [`RankedLine`] values, so a single
//! sort reorders both. The displayed line is always the original text; the
//! candidate derived from it is used only for scoring.
//!
//! ## Example
//!
//! ```rust
//! use levrank::ranking::{RankOptions, Ranker};
//!
//! let corpus = vec!["sitting".to_string(), "kitten".to_string(), "smitten".to_string()];
//! let ranking = Ranker::new(RankOptions::default()).rank("kitten", corpus, None);
//!
//! let mut out = Vec::new();
//! ranking.write_to(&mut out, ",")?;
//! assert_eq!(String::from_utf8(out).unwrap(), "0,kitten\n2,smitten\n3,sitting\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::cmp::Reverse;
use std::fmt;
use std::io::{self, Write};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::{char_distance, CharBuf};
use crate::substitution::SubstitutionRules;

/// Separator written between the value and the line of each record.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Switches controlling normalization, sort direction and output scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Lower-case the query and every line before comparing.
    pub case_fold: bool,
    /// Sort from least to most similar.
    pub reverse: bool,
    /// Emit `1 - distance / max` instead of the raw distance.
    pub scale: bool,
}

/// The query, decoded once into chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    chars: CharBuf,
}

impl Query {
    /// Build a query, lower-casing it when `case_fold` is set.
    pub fn new(text: &str, case_fold: bool) -> Self {
        let chars = if case_fold {
            text.to_lowercase().chars().collect()
        } else {
            text.chars().collect()
        };
        Self { chars }
    }

    /// The query characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Edit distance from this query to an already-normalized candidate.
    pub fn distance_to(&self, candidate: &str) -> usize {
        let candidate: CharBuf = candidate.chars().collect();
        char_distance(&self.chars, &candidate)
    }
}

/// A corpus line paired with its distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedLine {
    /// Position of the line in the corpus.
    pub index: usize,
    /// Edit distance from the query to the line's candidate.
    pub distance: usize,
    /// The original line, before any normalization.
    pub line: String,
}

/// The value shown in front of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayValue {
    /// Raw edit distance.
    Distance(usize),
    /// Similarity score in `[0.0, 1.0]`, higher is closer.
    Score(f64),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance(distance) => write!(f, "{distance}"),
            // Keep a decimal point on whole scores so they never read as distances
            Self::Score(score) if score.fract() == 0.0 => write!(f, "{score:.1}"),
            Self::Score(score) => write!(f, "{score}"),
        }
    }
}

/// One output record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    /// Distance or score.
    pub value: DisplayValue,
    /// Original line text.
    pub line: &'a str,
}

/// The sorted result of a ranking run.
#[derive(Debug, Clone)]
pub struct Ranking {
    lines: Vec<RankedLine>,
    scale: bool,
    min: Option<usize>,
    max: Option<usize>,
}

impl Ranking {
    /// Lines in ranked order.
    pub fn lines(&self) -> &[RankedLine] {
        &self.lines
    }

    /// Number of ranked lines (always the corpus size).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the corpus was empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Smallest distance in the ranking, `None` for an empty corpus.
    pub fn min_distance(&self) -> Option<usize> {
        self.min
    }

    /// Largest distance in the ranking, `None` for an empty corpus.
    ///
    /// This is the true maximum regardless of sort direction.
    pub fn max_distance(&self) -> Option<usize> {
        self.max
    }

    /// Display value for `distance` under this ranking's scale setting.
    ///
    /// When every distance is zero the scale is degenerate and every line
    /// gets the top score, `1.0`.
    pub fn display_value(&self, distance: usize) -> DisplayValue {
        if !self.scale {
            return DisplayValue::Distance(distance);
        }
        match self.max {
            Some(max) if max > 0 => DisplayValue::Score(1.0 - distance as f64 / max as f64),
            _ => DisplayValue::Score(1.0),
        }
    }

    /// Output records in ranked order.
    pub fn records(&self) -> Vec<Record<'_>> {
        self.lines
            .iter()
            .map(|ranked| Record {
                value: self.display_value(ranked.distance),
                line: &ranked.line,
            })
            .collect()
    }

    /// Write one `<value><separator><line>` row per record.
    pub fn write_to<W: Write>(&self, mut writer: W, separator: &str) -> io::Result<()> {
        for record in self.records() {
            writeln!(writer, "{}{}{}", record.value, separator, record.line)?;
        }
        writer.flush()
    }
}

/// Ranks corpora against queries under a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    options: RankOptions,
}

impl Ranker {
    /// Create a ranker.
    pub fn new(options: RankOptions) -> Self {
        Self { options }
    }

    /// The options this ranker was built with.
    pub fn options(&self) -> RankOptions {
        self.options
    }

    /// Turn an original line into the candidate used for scoring.
    pub fn normalize(&self, line: &str, rules: Option<&SubstitutionRules>) -> String {
        let folded = if self.options.case_fold {
            line.to_lowercase()
        } else {
            line.to_string()
        };

        match rules {
            Some(rules) if !rules.is_empty() => rules.apply(&folded),
            _ => folded,
        }
    }

    /// Rank `corpus` by distance to `query`.
    ///
    /// The result always holds one entry per corpus line. Lines with equal
    /// distance keep their corpus order in both sort directions.
    pub fn rank(
        &self,
        query: &str,
        corpus: Vec<String>,
        rules: Option<&SubstitutionRules>,
    ) -> Ranking {
        let query = Query::new(query, self.options.case_fold);
        let distances = self.distances(&query, &corpus, rules);

        let mut lines: Vec<RankedLine> = corpus
            .into_iter()
            .zip(distances)
            .enumerate()
            .map(|(index, (line, distance))| RankedLine {
                index,
                distance,
                line,
            })
            .collect();

        // Stable sorts: ties stay in corpus order
        if self.options.reverse {
            lines.sort_by_key(|ranked| Reverse(ranked.distance));
        } else {
            lines.sort_by_key(|ranked| ranked.distance);
        }

        let min = lines.iter().map(|ranked| ranked.distance).min();
        let max = lines.iter().map(|ranked| ranked.distance).max();

        tracing::debug!(
            lines = lines.len(),
            ?min,
            ?max,
            reverse = self.options.reverse,
            scale = self.options.scale,
            "ranked corpus"
        );

        Ranking {
            lines,
            scale: self.options.scale,
            min,
            max,
        }
    }

    #[cfg(feature = "parallel")]
    fn distances(
        &self,
        query: &Query,
        corpus: &[String],
        rules: Option<&SubstitutionRules>,
    ) -> Vec<usize> {
        corpus
            .par_iter()
            .map(|line| query.distance_to(&self.normalize(line, rules)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn distances(
        &self,
        query: &Query,
        corpus: &[String],
        rules: Option<&SubstitutionRules>,
    ) -> Vec<usize> {
        corpus
            .iter()
            .map(|line| query.distance_to(&self.normalize(line, rules)))
            .collect()
    }
}
