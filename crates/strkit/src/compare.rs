//! Prefix, suffix and bounded comparisons with a case strategy

use crate::case::{CaseTable, UnicodeCaseTable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Whether comparisons fold case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaseSensitivity {
    /// Characters must match exactly
    #[default]
    Sensitive,
    /// Characters are compared after lowercasing
    Insensitive,
}

impl CaseSensitivity {
    fn fold(self, c: char) -> char {
        match self {
            Self::Sensitive => c,
            Self::Insensitive => UnicodeCaseTable.lowercase(c),
        }
    }

    fn chars_eq(self, a: char, b: char) -> bool {
        self.fold(a) == self.fold(b)
    }
}

/// Whether `text` begins with `prefix`; an empty prefix always matches
pub fn starts_with(text: &str, prefix: &str, case: CaseSensitivity) -> bool {
    let mut chars = text.chars();
    prefix
        .chars()
        .all(|p| chars.next().is_some_and(|t| case.chars_eq(t, p)))
}

/// Whether `text` ends with `suffix`; an empty suffix always matches
pub fn ends_with(text: &str, suffix: &str, case: CaseSensitivity) -> bool {
    let mut chars = text.chars().rev();
    suffix
        .chars()
        .rev()
        .all(|s| chars.next().is_some_and(|t| case.chars_eq(t, s)))
}

/// Compare at most the first `n` characters of `a` and `b`
///
/// A string that ends before `n` characters sorts before one that
/// continues, so `compare_prefix("ab", "abc", 3, ..)` is `Less`.
///
/// ```
/// use std::cmp::Ordering;
/// use strkit::compare::{compare_prefix, CaseSensitivity};
///
/// let ord = compare_prefix("test str 12", "Test StR 1234", 11, CaseSensitivity::Insensitive);
/// assert_eq!(ord, Ordering::Equal);
/// ```
pub fn compare_prefix(a: &str, b: &str, n: usize, case: CaseSensitivity) -> Ordering {
    let left = a.chars().take(n).map(|c| case.fold(c));
    let right = b.chars().take(n).map(|c| case.fold(c));
    left.cmp(right)
}

/// ASCII decimal digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ASCII uppercase letter
pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Unicode white space
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CaseSensitivity::{Insensitive, Sensitive};

    #[test]
    fn test_compare_prefix() {
        let str1 = "test str 1234";
        let str2 = "test str 12";
        let str3 = "Test StR 1234";

        assert_eq!(compare_prefix(str1, str2, 10, Sensitive), Ordering::Equal);
        assert_eq!(compare_prefix(str1, str2, 11, Sensitive), Ordering::Equal);
        assert_eq!(compare_prefix(str2, str3, 10, Insensitive), Ordering::Equal);
        assert_eq!(compare_prefix(str2, str3, 11, Insensitive), Ordering::Equal);

        assert_eq!(compare_prefix(str1, str2, 12, Sensitive), Ordering::Greater);
        assert_eq!(compare_prefix(str2, str3, 10, Sensitive), Ordering::Greater);
        assert_eq!(compare_prefix("abc", "abd", 0, Sensitive), Ordering::Equal);
    }

    #[test]
    fn test_starts_with_sensitive() {
        assert!(starts_with("", "", Sensitive));
        assert!(starts_with("Joe", "", Sensitive));
        assert!(starts_with("Joe", "J", Sensitive));
        assert!(starts_with("Joe\\", "J", Sensitive));
        assert!(starts_with("Joe", "Joe", Sensitive));
        assert!(starts_with("The quick brown fox", "The quic", Sensitive));
        assert!(!starts_with("", "J", Sensitive));
        assert!(!starts_with("Joe", "Joe2", Sensitive));
        assert!(!starts_with("The quick brown fox", "The quiC", Sensitive));
    }

    #[test]
    fn test_starts_with_insensitive() {
        assert!(starts_with("", "", Insensitive));
        assert!(starts_with("Joe", "j", Insensitive));
        assert!(starts_with("The quick brown fox", "The quiC", Insensitive));
        assert!(!starts_with("Joe", "Joe2", Insensitive));
    }

    #[test]
    fn test_ends_with_sensitive() {
        assert!(ends_with("", "", Sensitive));
        assert!(ends_with("Joe", "", Sensitive));
        assert!(ends_with("Joe", "e", Sensitive));
        assert!(ends_with("Joe\\", "\\", Sensitive));
        assert!(ends_with("The quick brown fox", "n fox", Sensitive));
        assert!(ends_with("Joe", "Joe", Sensitive));
        assert!(!ends_with("", "J", Sensitive));
        assert!(!ends_with("Joe", "Joe2", Sensitive));
        assert!(!ends_with("Joe", "2Joe", Sensitive));
        assert!(!ends_with("The quick brown fox", "n foX", Sensitive));
    }

    #[test]
    fn test_ends_with_insensitive() {
        assert!(ends_with("", "", Insensitive));
        assert!(ends_with("Joe", "E", Insensitive));
        assert!(ends_with("The quick brown fox", "n FOX", Insensitive));
        assert!(ends_with("Joe", "JOE", Insensitive));
        assert!(ends_with(
            "The quick brown fox",
            "The quick brown FOX",
            Insensitive
        ));
        assert!(!ends_with("Joe", "2Joe", Insensitive));
    }

    #[test]
    fn test_char_classes() {
        for c in '0'..='9' {
            assert!(is_digit(c));
        }
        assert!(!is_digit('a'));
        assert!(!is_digit('\u{0661}'));

        for c in 'A'..='Z' {
            assert!(is_upper(c));
        }
        assert!(!is_upper('a'));
        assert!(!is_upper('1'));

        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(is_space('\u{3000}'));
        assert!(!is_space('x'));
    }
}
