//! Bounded, non-overlapping find-and-replace
//!
//! Matches are found left to right in the original input. Text produced by
//! a replacement is never searched again, so replacing `"1"` with
//! `"1234567890"` terminates and counts one replacement per original match.
//! Every function reports how many replacements it made.
//!
//! An empty needle matches nothing: the input comes back unchanged with a
//! count of zero.

use crate::case::CaseTable;
use crate::compare::CaseSensitivity;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Upper bound on the number of replacements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplaceLimit {
    /// Replace every occurrence
    #[default]
    Unbounded,
    /// Replace at most this many occurrences
    AtMost(usize),
}

impl ReplaceLimit {
    /// Maximum replacement count as a number
    #[must_use]
    pub const fn max_count(self) -> usize {
        match self {
            Self::Unbounded => usize::MAX,
            Self::AtMost(n) => n,
        }
    }
}

impl From<Option<usize>> for ReplaceLimit {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Unbounded, Self::AtMost)
    }
}

/// Replace occurrences of `needle` in `haystack`
///
/// Returns the new text and the number of replacements made.
///
/// ```
/// use strkit::replace::{replace_all, ReplaceLimit};
///
/// let (out, count) = replace_all("a a a b ", "a", "d", ReplaceLimit::AtMost(5));
/// assert_eq!(out, "d d d b ");
/// assert_eq!(count, 3);
/// ```
pub fn replace_all(
    haystack: &str,
    needle: &str,
    replacement: &str,
    limit: ReplaceLimit,
) -> (String, usize) {
    if needle.is_empty() {
        return (haystack.to_string(), 0);
    }

    let mut out = String::with_capacity(haystack.len());
    let mut copied_to = 0;
    let mut count = 0;
    for (start, matched) in haystack.match_indices(needle).take(limit.max_count()) {
        out.push_str(&haystack[copied_to..start]);
        out.push_str(replacement);
        copied_to = start + matched.len();
        count += 1;
    }
    out.push_str(&haystack[copied_to..]);

    trace!("replaced {count} occurrences of {needle:?}");
    (out, count)
}

/// [`replace_all`] that rewrites `target` and returns the count
///
/// `target` is left untouched when nothing matches.
pub fn replace_in_place(
    target: &mut String,
    needle: &str,
    replacement: &str,
    limit: ReplaceLimit,
) -> usize {
    let (out, count) = replace_all(target, needle, replacement, limit);
    if count > 0 {
        *target = out;
    }
    count
}

/// Shared scan: copy `source`, splicing in `replacement` wherever
/// `is_match_at` reports a match of `needle_len` units
fn splice<T: Clone>(
    source: &[T],
    needle_len: usize,
    replacement: &[T],
    limit: ReplaceLimit,
    is_match_at: impl Fn(usize) -> bool,
) -> (Vec<T>, usize) {
    let mut out = Vec::with_capacity(source.len());
    let mut count = 0;
    let mut i = 0;
    let max = limit.max_count();

    if needle_len > 0 {
        while i + needle_len <= source.len() && count < max {
            if is_match_at(i) {
                out.extend_from_slice(replacement);
                i += needle_len;
                count += 1;
            } else {
                out.push(source[i].clone());
                i += 1;
            }
        }
    }
    out.extend_from_slice(&source[i..]);
    (out, count)
}

/// Replace over arbitrary code units, such as UTF-16 slices
///
/// Matching compares the needle at every position, so the cost is
/// `O(haystack.len() * needle.len())` in the worst case.
pub fn replace_units<T: PartialEq + Clone>(
    haystack: &[T],
    needle: &[T],
    replacement: &[T],
    limit: ReplaceLimit,
) -> (Vec<T>, usize) {
    splice(haystack, needle.len(), replacement, limit, |i| {
        haystack[i..].starts_with(needle)
    })
}

/// Replace with an explicit case strategy
///
/// For [`CaseSensitivity::Insensitive`] both texts are folded through
/// `table` for matching. Unmatched text keeps its original case.
pub fn replace_with_case(
    haystack: &str,
    needle: &str,
    replacement: &str,
    limit: ReplaceLimit,
    case: CaseSensitivity,
    table: &impl CaseTable,
) -> (String, usize) {
    if case == CaseSensitivity::Sensitive {
        return replace_all(haystack, needle, replacement, limit);
    }

    let source: Vec<char> = haystack.chars().collect();
    let folded: Vec<char> = source.iter().map(|&c| table.lowercase(c)).collect();
    let folded_needle: Vec<char> = needle.chars().map(|c| table.lowercase(c)).collect();
    let replacement: Vec<char> = replacement.chars().collect();

    let (out, count) = splice(&source, folded_needle.len(), &replacement, limit, |i| {
        folded[i..].starts_with(&folded_needle)
    });
    (out.into_iter().collect(), count)
}

/// Replace every occurrence of `needle` regardless of case
///
/// Uses Unicode simple case folding.
pub fn replace_ignore_case(haystack: &str, needle: &str, replacement: &str) -> String {
    replace_with_case(
        haystack,
        needle,
        replacement,
        ReplaceLimit::Unbounded,
        CaseSensitivity::Insensitive,
        &crate::case::UnicodeCaseTable,
    )
    .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::AsciiCaseTable;
    use ReplaceLimit::{AtMost, Unbounded};

    fn replace(t: &mut String, needle: &str, with: &str, max: usize) -> usize {
        replace_in_place(t, needle, with, AtMost(max))
    }

    #[test]
    fn test_replace_single_char() {
        assert_eq!(
            replace_all("a a a b ", "a", "d", AtMost(5)),
            ("d d d b ".to_string(), 3)
        );
        assert_eq!(
            replace_all("a a a b ", "b", "d", AtMost(5)),
            ("a a a d ".to_string(), 1)
        );
        assert_eq!(
            replace_all("a a a b ", "a", "d", AtMost(1)),
            ("d a a b ".to_string(), 1)
        );
    }

    #[test]
    fn test_replace_cascade() {
        let mut t = "a a a b ".to_string();
        assert_eq!(replace(&mut t, "a", "dd", 5), 3);
        assert_eq!(t, "dd dd dd b ");

        assert_eq!(replace(&mut t, "dd", "dddd", 5), 3);
        assert_eq!(t, "dddd dddd dddd b ");

        assert_eq!(replace(&mut t, "dd", "dddd", 5), 5);
        assert_eq!(t, "dddddddd dddddddd dddddd b ");

        replace(&mut t, "dddddddd", "dddd", 2);
        assert_eq!(t, "dddd dddd dddddd b ");

        replace(&mut t, "d", "a", 2);
        assert_eq!(t, "aadd dddd dddddd b ");

        replace(&mut t, "d d", "c", 2);
        assert_eq!(t, "aadcddcddddd b ");

        replace(&mut t, "c", "1234567890", 2);
        assert_eq!(t, "aad1234567890dd1234567890ddddd b ");

        replace(&mut t, "1", "1234567890", 2);
        assert_eq!(t, "aad1234567890234567890dd1234567890234567890ddddd b ");

        replace(&mut t, "1234567890", "", 2);
        assert_eq!(t, "aad234567890dd234567890ddddd b ");
    }

    #[test]
    fn test_replace_non_overlapping() {
        let mut t = "a aa aa b ".to_string();
        replace(&mut t, "aa", "b", 5);
        assert_eq!(t, "a b b b ");

        let mut t = "moo a aa aa b ".to_string();
        replace(&mut t, "aa", "b", 5);
        assert_eq!(t, "moo a b b b ");

        assert_eq!(replace_all("aaa", "aa", "x", Unbounded), ("xa".to_string(), 1));
    }

    #[test]
    fn test_replace_edge_cases() {
        assert_eq!(replace_all("abc", "", "x", Unbounded), ("abc".to_string(), 0));
        assert_eq!(replace_all("abc", "b", "x", AtMost(0)), ("abc".to_string(), 0));
        assert_eq!(replace_all("", "b", "x", Unbounded), (String::new(), 0));
        assert_eq!(replace_all("ab", "abc", "x", Unbounded), ("ab".to_string(), 0));

        let mut t = "unchanged".to_string();
        assert_eq!(replace_in_place(&mut t, "zz", "y", Unbounded), 0);
        assert_eq!(t, "unchanged");
    }

    #[test]
    fn test_replace_units_utf16() {
        let hay: Vec<u16> = "a/b/c".encode_utf16().collect();
        let (out, count) = replace_units(&hay, &[u16::from(b'/')], &[u16::from(b'\\')], Unbounded);
        assert_eq!(String::from_utf16(&out).unwrap(), "a\\b\\c");
        assert_eq!(count, 2);

        let (out, count) = replace_units(&hay, &[], &[1], Unbounded);
        assert_eq!(out, hay);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_replace_units_near_misses() {
        let mut hay = vec![b'a'; 4096];
        hay.push(b'b');
        let needle = [b'a', b'a', b'a', b'b'];

        let (out, count) = replace_units(&hay, &needle, b"X", Unbounded);
        assert_eq!(count, 1);
        assert_eq!(out.len(), 4093 + 1);
        assert_eq!(out.last(), Some(&b'X'));
        assert!(out[..4093].iter().all(|&u| u == b'a'));
    }

    #[test]
    fn test_replace_ignore_case() {
        assert_eq!(replace_ignore_case("ABCABCAB", "bc", "dddd"), "AddddAddddAB");
        assert_eq!(replace_ignore_case("ABCABCABC", "bc", "d"), "AdAdAd");
        assert_eq!(replace_ignore_case("ΑΒΓ", "β", "b"), "ΑbΓ");
    }

    #[test]
    fn test_replace_with_case_strategies() {
        assert_eq!(
            replace_with_case("ABab", "ab", "x", Unbounded, CaseSensitivity::Sensitive, &AsciiCaseTable),
            ("ABx".to_string(), 1)
        );
        assert_eq!(
            replace_with_case("ABab", "ab", "x", AtMost(1), CaseSensitivity::Insensitive, &AsciiCaseTable),
            ("xab".to_string(), 1)
        );
        assert_eq!(
            replace_with_case("ΑΒ", "αβ", "x", Unbounded, CaseSensitivity::Insensitive, &AsciiCaseTable),
            ("ΑΒ".to_string(), 0)
        );
    }

    #[test]
    fn test_limit_from_option() {
        assert_eq!(ReplaceLimit::from(None), Unbounded);
        assert_eq!(ReplaceLimit::from(Some(3)), AtMost(3));
        assert_eq!(Unbounded.max_count(), usize::MAX);
    }
}
