//! # levrank
//!
//! Rank lines by Levenshtein edit distance to a query word.
//!
//! Given a query and a corpus of lines, `levrank` returns the corpus sorted
//! from most to least similar, each line annotated with its edit distance or
//! with a normalized similarity score (`1 - distance / max`).
//!
//! Before comparison, lines can be lower-cased and rewritten by an ordered
//! list of substitution rules. Rewriting only affects scoring: the original
//! line is what gets reported.
//!
//! ## Example
//!
//! ```rust
//! use levrank::prelude::*;
//!
//! let corpus = vec!["sitting".to_string(), "kitten".to_string(), "smitten".to_string()];
//! let ranking = Ranker::new(RankOptions::default()).rank("kitten", corpus, None);
//!
//! let best = &ranking.lines()[0];
//! assert_eq!(best.line, "kitten");
//! assert_eq!(best.distance, 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod distance;
pub mod error;
pub mod ranking;
pub mod substitution;

/// Command-line interface: arguments, configuration and command execution
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::corpus::{load_corpus, read_lines};
    pub use crate::distance::{char_distance, standard_distance};
    pub use crate::error::RankError;
    pub use crate::ranking::{
        DisplayValue, Query, RankOptions, RankedLine, Ranker, Ranking, Record, DEFAULT_SEPARATOR,
    };
    pub use crate::substitution::{MatchMode, SubstitutionRule, SubstitutionRules};
}
