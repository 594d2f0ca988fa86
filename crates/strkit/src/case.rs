//! Character case mapping
//!
//! Case folding is routed through a [`CaseTable`] so callers choose between
//! ASCII-only folding and Unicode simple case mappings without the rest of
//! the crate consulting any process-wide locale.

/// One-to-one character case mapping
///
/// Implementations must map a character to exactly one character. Mappings
/// that expand (`'ß'` to `"SS"`) are left unchanged.
pub trait CaseTable {
    /// Lowercase form of `c`
    fn lowercase(&self, c: char) -> char;

    /// Uppercase form of `c`
    fn uppercase(&self, c: char) -> char;
}

/// Folds `A-Z`/`a-z` only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiCaseTable;

impl CaseTable for AsciiCaseTable {
    fn lowercase(&self, c: char) -> char {
        c.to_ascii_lowercase()
    }

    fn uppercase(&self, c: char) -> char {
        c.to_ascii_uppercase()
    }
}

/// Unicode simple (single character) case mappings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeCaseTable;

fn single<I: Iterator<Item = char>>(mut mapped: I, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

impl CaseTable for UnicodeCaseTable {
    fn lowercase(&self, c: char) -> char {
        single(c.to_lowercase(), c)
    }

    fn uppercase(&self, c: char) -> char {
        single(c.to_uppercase(), c)
    }
}

/// Lowercase every character of `text` through `table`
pub fn to_lowercase(text: &str, table: &impl CaseTable) -> String {
    text.chars().map(|c| table.lowercase(c)).collect()
}

/// Uppercase every character of `text` through `table`
pub fn to_uppercase(text: &str, table: &impl CaseTable) -> String {
    text.chars().map(|c| table.uppercase(c)).collect()
}
