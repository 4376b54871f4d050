//! Ordered text substitutions applied to candidates before scoring.
//!
//! A rules file holds one rule per line, `match<TAB>replacement`. The
//! replacement is optional and defaults to the empty string, so a line with
//! only a pattern deletes every occurrence of it.
//!
//! Rules run in file order. Each rule rewrites the *whole* string (every
//! non-overlapping occurrence) before the next rule sees it, so later rules
//! observe the output of earlier ones:
//!
//! ```rust
//! use levrank::substitution::{MatchMode, SubstitutionRules};
//!
//! let rules = SubstitutionRules::parse("ph\tf\nf\tv\n".as_bytes(), false, MatchMode::Literal)?;
//! assert_eq!(rules.apply("phosphor"), "vosvor");
//! # Ok::<(), levrank::error::RankError>(())
//! ```
//!
//! ## File format boundaries
//!
//! - Empty lines are skipped; they are not rules.
//! - A trailing `\r` is dropped, so CRLF files behave like LF files.
//! - More than two tab-separated fields rejects the whole file.
//! - A tab with an empty pattern (`"\tx"`) rejects the whole file.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::{RankError, Result};

const FIELD_SEPARATOR: char = '\t';

/// How a rule's match field is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The pattern is a literal substring.
    #[default]
    Literal,
    /// The pattern is a regular expression; metacharacters are active.
    ///
    /// The replacement is still inserted verbatim (`$1` is not expanded).
    Regex,
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal(String),
    Regex(Regex),
}

/// A single `(match, replacement)` rule.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    matcher: Matcher,
    replacement: String,
}

impl SubstitutionRule {
    /// Build a rule from a pattern and its replacement.
    ///
    /// # Errors
    ///
    /// In [`MatchMode::Regex`] an invalid pattern is reported as
    /// [`RankError::MalformedRule`] with `line` set to 0.
    pub fn new(pattern: &str, replacement: &str, mode: MatchMode) -> Result<Self> {
        Self::compile(pattern, replacement, mode, false, 0)
    }

    /// With `case_fold`, literal patterns are lower-cased and regex patterns
    /// are compiled case-insensitively. Lower-casing regex source would turn
    /// classes like `\D` or `\W` into their complements.
    fn compile(
        pattern: &str,
        replacement: &str,
        mode: MatchMode,
        case_fold: bool,
        line: usize,
    ) -> Result<Self> {
        let matcher = match mode {
            MatchMode::Literal if case_fold => Matcher::Literal(pattern.to_lowercase()),
            MatchMode::Literal => Matcher::Literal(pattern.to_string()),
            MatchMode::Regex => {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(case_fold)
                    .build()
                    .map_err(|e| RankError::MalformedRule {
                        line,
                        reason: format!("invalid pattern {pattern:?}: {e}"),
                    })?;
                Matcher::Regex(regex)
            }
        };

        Ok(Self {
            matcher,
            replacement: replacement.to_string(),
        })
    }

    /// The match field: lower-cased for literal rules loaded with case-folding,
    /// otherwise as written.
    pub fn pattern(&self) -> &str {
        match &self.matcher {
            Matcher::Literal(pattern) => pattern,
            Matcher::Regex(regex) => regex.as_str(),
        }
    }

    /// The replacement text.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every non-overlapping occurrence of the pattern in `text`.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.matcher {
            Matcher::Literal(pattern) => {
                if text.contains(pattern.as_str()) {
                    Cow::Owned(text.replace(pattern.as_str(), &self.replacement))
                } else {
                    Cow::Borrowed(text)
                }
            }
            Matcher::Regex(regex) => regex.replace_all(text, NoExpand(&self.replacement)),
        }
    }
}

/// An ordered set of substitution rules.
///
/// The default value holds no rules, in which case [`apply`](Self::apply)
/// is the identity.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionRules {
    rules: Vec<SubstitutionRule>,
}

impl SubstitutionRules {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rules from a tab-separated file.
    ///
    /// With `case_fold`, patterns match lower-cased candidates: literal
    /// patterns are lower-cased, regex patterns match case-insensitively.
    /// Replacements are left untouched.
    ///
    /// # Errors
    ///
    /// - [`RankError::InputUnreadable`] if the file cannot be opened or read
    /// - [`RankError::MalformedRule`] if any line is malformed
    pub fn load<P: AsRef<Path>>(path: P, case_fold: bool, mode: MatchMode) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| RankError::unreadable(Some(path.to_path_buf()), e))?;

        Self::parse(BufReader::new(file), case_fold, mode).map_err(|err| match err {
            RankError::InputUnreadable { source, .. } => {
                RankError::unreadable(Some(path.to_path_buf()), source)
            }
            other => other,
        })
    }

    /// Parse rules from any reader.
    ///
    /// See the [module docs](self) for the accepted format.
    pub fn parse<R: Read>(reader: R, case_fold: bool, mode: MatchMode) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut rules = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| RankError::unreadable(None, e))?;
            let line_number = index + 1;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            let (pattern, replacement) = match fields.as_slice() {
                [pattern] => (*pattern, ""),
                [pattern, replacement] => (*pattern, *replacement),
                _ => {
                    return Err(RankError::MalformedRule {
                        line: line_number,
                        reason: format!(
                            "expected at most 2 tab-separated fields, found {}",
                            fields.len()
                        ),
                    })
                }
            };

            if pattern.is_empty() {
                return Err(RankError::MalformedRule {
                    line: line_number,
                    reason: "empty match pattern".to_string(),
                });
            }

            rules.push(SubstitutionRule::compile(
                pattern,
                replacement,
                mode,
                case_fold,
                line_number,
            )?);
        }

        tracing::debug!(rules = rules.len(), ?mode, case_fold, "loaded substitution rules");

        Ok(Self { rules })
    }

    /// Append a rule; it runs after all existing rules.
    pub fn push(&mut self, rule: SubstitutionRule) {
        self.rules.push(rule);
    }

    /// Apply every rule, in order, to an owned copy of `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&current) {
                Cow::Owned(replaced) => Some(replaced),
                Cow::Borrowed(_) => None,
            };
            if let Some(replaced) = replaced {
                current = replaced;
            }
        }
        current
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &SubstitutionRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<SubstitutionRules> {
        SubstitutionRules::parse(text.as_bytes(), false, MatchMode::Literal)
    }

    #[test]
    fn test_empty_rules_are_identity() {
        let rules = SubstitutionRules::new();
        assert!(rules.is_empty());
        assert_eq!(rules.apply("Hello, World"), "Hello, World");
    }

    #[test]
    fn test_missing_replacement_deletes() {
        let rules = parse("-\n").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.iter().next().unwrap().replacement(), "");
        assert_eq!(rules.apply("foo-bar-baz"), "foobarbaz");
    }

    #[test]
    fn test_global_replace() {
        let rules = parse("a\tb\n").unwrap();
        assert_eq!(rules.apply("banana"), "bbnbnb");
    }

    #[test]
    fn test_rules_apply_in_file_order() {
        let forward = parse("ph\tf\nf\tv\n").unwrap();
        assert_eq!(forward.apply("phone"), "vone");

        let backward = parse("f\tv\nph\tf\n").unwrap();
        assert_eq!(backward.apply("phone"), "fone");
    }

    #[test]
    fn test_non_overlapping_matches() {
        let rules = parse("aa\tb\n").unwrap();
        assert_eq!(rules.apply("aaa"), "ba");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rules = parse("\na\tb\n\n\nc\td\n").unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_crlf_lines() {
        let rules = parse("a\tb\r\nc\r\n").unwrap();
        assert_eq!(rules.apply("abc"), "bb");
    }

    #[test]
    fn test_too_many_fields_rejected() {
        let err = parse("a\tb\n\nx\ty\tz\n").unwrap_err();
        match err {
            RankError::MalformedRule { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("found 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_pattern_with_tab_rejected() {
        let err = parse("\tx\n").unwrap_err();
        assert!(matches!(err, RankError::MalformedRule { line: 1, .. }));
    }

    #[test]
    fn test_case_fold_lowers_pattern_only() {
        let rules =
            SubstitutionRules::parse("A\tB\n".as_bytes(), true, MatchMode::Literal).unwrap();
        let rule = rules.iter().next().unwrap();
        assert_eq!(rule.pattern(), "a");
        assert_eq!(rule.replacement(), "B");
        assert_eq!(rules.apply("apple"), "Bpple");
    }

    #[test]
    fn test_literal_mode_ignores_metacharacters() {
        let rules = parse(".\t!\n").unwrap();
        assert_eq!(rules.apply("a.b"), "a!b");
    }

    #[test]
    fn test_regex_mode() {
        let rules =
            SubstitutionRules::parse("[0-9]+\t#\n".as_bytes(), false, MatchMode::Regex).unwrap();
        assert_eq!(rules.apply("abc123def45"), "abc#def#");
    }

    #[test]
    fn test_regex_replacement_is_literal() {
        let rules =
            SubstitutionRules::parse("(a)\t$1$1\n".as_bytes(), false, MatchMode::Regex).unwrap();
        assert_eq!(rules.apply("cat"), "c$1$1t");
    }

    #[test]
    fn test_regex_case_fold_keeps_escape_classes() {
        let not_digit =
            SubstitutionRules::parse("\\D\n".as_bytes(), true, MatchMode::Regex).unwrap();
        assert_eq!(not_digit.apply("abc123"), "123");

        let not_word =
            SubstitutionRules::parse("\\W\t_\n".as_bytes(), true, MatchMode::Regex).unwrap();
        assert_eq!(not_word.apply("a b"), "a_b");
    }

    #[test]
    fn test_regex_case_fold_matches_any_case() {
        let rules =
            SubstitutionRules::parse("PH\tF\n".as_bytes(), true, MatchMode::Regex).unwrap();
        assert_eq!(rules.iter().next().unwrap().pattern(), "PH");
        assert_eq!(rules.apply("phone"), "Fone");
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = SubstitutionRules::parse("(\tx\n".as_bytes(), false, MatchMode::Regex)
            .unwrap_err();
        assert!(matches!(err, RankError::MalformedRule { line: 1, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SubstitutionRules::load("/nonexistent/rules.tsv", false, MatchMode::Literal)
            .unwrap_err();
        match err {
            RankError::InputUnreadable { path, .. } => {
                assert_eq!(path.unwrap(), Path::new("/nonexistent/rules.tsv"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_push_runs_last() {
        let mut rules = parse("a\tb\n").unwrap();
        rules.push(SubstitutionRule::new("b", "c", MatchMode::Literal).unwrap());
        assert_eq!(rules.apply("ab"), "cc");
    }
}
