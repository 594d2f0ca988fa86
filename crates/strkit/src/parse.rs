//! Lenient and strict text-to-value parsing
//!
//! Two parsing contracts live side by side and are deliberately kept apart:
//!
//! - **Lenient** (`parse_double`, `parse_int`, `parse_int64`): skip leading
//!   whitespace, read the longest numeric prefix, ignore trailing text, and
//!   return a default (`0` / `0.0`) when nothing parses. Use these where the
//!   caller has already validated the input.
//! - **Strict** (`parse_decimal_int_checked`, `parse_signed`,
//!   `parse_unsigned`, `parse_tristate`, `parse_name_value_pair`): the whole
//!   input must match, and every failure is a typed [`ParseError`]. Use these
//!   for configuration and security sensitive values.
//!
//! Each call reports its own outcome; there is no shared error state that a
//! previous failure could leak into a later success.

use crate::error::{Format, ParseError, Result};
use crate::numeric::Radix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::trace;

/// Three-valued flag where "unspecified" is a value in its own right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tristate {
    /// Explicitly false (`"0"`)
    False,
    /// Explicitly true (`"1"`)
    True,
    /// Not specified (`"2"`)
    #[default]
    None,
}

impl Tristate {
    /// Collapse into an optional boolean
    #[must_use]
    pub const fn as_option(self) -> Option<bool> {
        match self {
            Self::False => Some(false),
            Self::True => Some(true),
            Self::None => None,
        }
    }
}

impl From<Option<bool>> for Tristate {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(false) => Self::False,
            Some(true) => Self::True,
            None => Self::None,
        }
    }
}

impl fmt::Display for Tristate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::False => "0",
            Self::True => "1",
            Self::None => "2",
        };
        f.write_str(code)
    }
}

impl FromStr for Tristate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_tristate(s)
    }
}

/// Split off an optional sign and the run of ASCII digits that follows it
///
/// Returns `(negative, digits)`. `digits` is empty when no digit follows.
fn leading_integer(text: &str) -> (bool, &str) {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    (negative, &rest[..end])
}

/// Accumulate a digit run into an `i64`, saturating at the bounds
fn saturating_accumulate(negative: bool, digits: &str) -> i64 {
    let mut value: i64 = 0;
    for digit in digits.bytes() {
        let d = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Lenient 64-bit integer parse
///
/// Leading whitespace is skipped, an optional sign and decimal digits are
/// read, and anything after them is ignored. Returns 0 when no digits are
/// present and saturates at `i64::MIN`/`i64::MAX` on overflow. Never fails.
pub fn parse_int64(text: &str) -> i64 {
    let (negative, digits) = leading_integer(text);
    if digits.is_empty() {
        trace!("lenient integer parse found no digits in {text:?}, using 0");
        return 0;
    }
    saturating_accumulate(negative, digits)
}

/// Lenient 32-bit integer parse
///
/// Same rules as [`parse_int64`], saturating at the `i32` bounds.
pub fn parse_int(text: &str) -> i32 {
    let wide = parse_int64(text);
    i32::try_from(wide).unwrap_or(if wide < 0 { i32::MIN } else { i32::MAX })
}

/// Lenient floating point parse
///
/// Leading whitespace is skipped and the longest prefix of the form
/// `[+-]digits[.digits][(e|E)[+-]digits]` is converted. Trailing text is
/// ignored. Returns 0.0 when no such prefix exists. Never fails.
pub fn parse_double(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        trace!("lenient float parse found no digits in {text:?}, using 0.0");
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().unwrap_or(0.0)
}

/// Strict decimal `i32` parse
///
/// After trimming surrounding whitespace the text must be an optional sign
/// followed by one or more decimal digits. Radix prefixes such as `0x` are
/// rejected.
///
/// # Errors
///
/// - [`ParseError::InvalidFormat`] for empty or non-numeric text
/// - [`ParseError::Overflow`] / [`ParseError::Underflow`] when the value is
///   outside the `i32` range; the error carries the bound it clamps to
///
/// ```
/// use strkit::parse::parse_decimal_int_checked;
/// use strkit::ParseError;
///
/// assert_eq!(parse_decimal_int_checked("-935"), Ok(-935));
/// assert_eq!(
///     parse_decimal_int_checked("2147483648"),
///     Err(ParseError::Overflow { clamped: 2147483647 })
/// );
/// assert_eq!(parse_decimal_int_checked("935"), Ok(935));
/// ```
pub fn parse_decimal_int_checked(text: &str) -> Result<i32> {
    let trimmed = text.trim();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::invalid(
            Format::Integer,
            format!("not a decimal integer: {text:?}"),
        ));
    }

    trimmed.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => ParseError::Overflow {
            clamped: i128::from(i32::MAX),
        },
        IntErrorKind::NegOverflow => ParseError::Underflow {
            clamped: i128::from(i32::MIN),
        },
        _ => ParseError::invalid(Format::Integer, err.to_string()),
    })
}

fn radix_error(err: &std::num::ParseIntError, text: &str, max: i128, min: i128) -> ParseError {
    match err.kind() {
        IntErrorKind::PosOverflow => ParseError::Overflow { clamped: max },
        IntErrorKind::NegOverflow => ParseError::Underflow { clamped: min },
        _ => ParseError::invalid(Format::Integer, format!("{err}: {text:?}")),
    }
}

/// Strict signed parse in the given radix
///
/// Inverse of [`crate::numeric::format_signed`]: accepts an optional sign and
/// digits of the radix (either case), nothing else.
pub fn parse_signed(text: &str, radix: Radix) -> Result<i64> {
    i64::from_str_radix(text, radix.base()).map_err(|err| {
        radix_error(&err, text, i128::from(i64::MAX), i128::from(i64::MIN))
    })
}

/// Strict unsigned parse in the given radix
///
/// Inverse of [`crate::numeric::format_unsigned`]. A leading `-` is rejected.
pub fn parse_unsigned(text: &str, radix: Radix) -> Result<u64> {
    u64::from_str_radix(text, radix.base())
        .map_err(|err| radix_error(&err, text, i128::from(u64::MAX), 0))
}

/// Strict tristate parse: exactly `"0"`, `"1"`, or `"2"`
pub fn parse_tristate(text: &str) -> Result<Tristate> {
    match text {
        "0" => Ok(Tristate::False),
        "1" => Ok(Tristate::True),
        "2" => Ok(Tristate::None),
        _ => Err(ParseError::invalid(
            Format::Tristate,
            format!("expected 0, 1 or 2, got {text:?}"),
        )),
    }
}

/// Split `name<separator>value`
///
/// The text must contain exactly one separator with a non-empty name before
/// it and a non-empty value after it. The value is returned verbatim,
/// whitespace included.
pub fn parse_name_value_pair(text: &str, separator: char) -> Result<(String, String)> {
    let mut parts = text.split(separator);
    let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::invalid(
            Format::NameValue,
            format!("expected exactly one {separator:?} in {text:?}"),
        ));
    };

    if name.is_empty() || value.is_empty() {
        return Err(ParseError::invalid(
            Format::NameValue,
            format!("empty name or value in {text:?}"),
        ));
    }

    Ok((name.to_string(), value.to_string()))
}
