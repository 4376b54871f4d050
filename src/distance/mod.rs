//! Levenshtein distance between two character sequences.
//!
//! The distance is the minimum number of single-character insertions,
//! deletions and substitutions needed to turn one sequence into the other.
//! Transpositions are *not* a single operation (`"ab"` → `"ba"` costs 2).
//!
//! Comparison is per `char` and case-sensitive. Case-folding, if any, is
//! applied by the caller before the strings reach this module.

use smallvec::SmallVec;

/// Char buffer that stays on the stack for typical words and lines.
pub(crate) type CharBuf = SmallVec<[char; 32]>;

/// Strip common prefix and suffix from two char slices.
///
/// Returns `(prefix_len, adjusted_len_a, adjusted_len_b)` where:
/// - `prefix_len`: number of common prefix characters
/// - `adjusted_len_a`: length of `a` minus common prefix/suffix
/// - `adjusted_len_b`: length of `b` minus common prefix/suffix
///
/// Matching affixes never contribute to the edit distance, so the DP only
/// needs to run over the differing core.
#[inline(always)]
pub(crate) fn strip_common_affixes(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let len_a = a.len();
    let len_b = b.len();
    let min_len = len_a.min(len_b);

    let prefix_len = a
        .iter()
        .zip(b.iter())
        .take_while(|(x, y)| x == y)
        .count();

    if prefix_len == min_len {
        // One slice is a prefix of the other
        return (prefix_len, len_a - prefix_len, len_b - prefix_len);
    }

    // Suffix must not overlap the prefix
    let suffix_len = a[prefix_len..]
        .iter()
        .rev()
        .zip(b[prefix_len..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    (
        prefix_len,
        len_a - prefix_len - suffix_len,
        len_b - prefix_len - suffix_len,
    )
}

/// Compute standard Levenshtein distance between two strings.
///
/// # Example
///
/// ```rust
/// use levrank::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// assert_eq!(standard_distance("", "abc"), 3);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: CharBuf = source.chars().collect();
    let target_chars: CharBuf = target.chars().collect();
    char_distance(&source_chars, &target_chars)
}

/// Compute standard Levenshtein distance between two char slices.
///
/// This is the entry point used by the ranking pipeline, which decodes the
/// query once and reuses it for every candidate.
///
/// Runs in O(|a|·|b|) time and O(min(|a|, |b|)) space: two rolling rows
/// indexed by the shorter input.
pub fn char_distance(a: &[char], b: &[char]) -> usize {
    let (prefix_len, len_a, len_b) = strip_common_affixes(a, b);

    // Edge cases, including identical and empty inputs
    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let a = &a[prefix_len..prefix_len + len_a];
    let b = &b[prefix_len..prefix_len + len_b];

    // Distance is symmetric, so the rows can always follow the shorter side.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = inner.len();

    let mut prev_row: SmallVec<[usize; 32]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 32]> = SmallVec::from_elem(0, n + 1);

    for (i, &oc) in outer.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &ic) in inner.iter().enumerate() {
            curr_row[j + 1] = if oc == ic {
                prev_row[j]
            } else {
                1 + prev_row[j + 1] // deletion
                    .min(curr_row[j]) // insertion
                    .min(prev_row[j]) // substitution
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
