//! Integer and floating point formatting
//!
//! Integers are formatted as sign + magnitude in a [`Radix`], so `-1` in
//! binary is `"-1"` rather than a two's complement bit pattern.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Radix supported by the integer formatters and strict radix parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Radix {
    /// Base 2
    Binary,
    /// Base 8
    Octal,
    /// Base 10
    Decimal,
    /// Base 16, lowercase digits
    Hex,
}

impl Radix {
    /// Numeric base
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    /// Map a numeric base to a supported radix
    #[must_use]
    pub const fn from_base(base: u32) -> Option<Self> {
        match base {
            2 => Some(Self::Binary),
            8 => Some(Self::Octal),
            10 => Some(Self::Decimal),
            16 => Some(Self::Hex),
            _ => None,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base())
    }
}

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Format an unsigned magnitude without a sign
fn format_magnitude(mut value: u64, radix: Radix) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let base = u64::from(radix.base());
    // 64 binary digits is the widest output
    let mut buf = [0u8; 64];
    let mut pos = buf.len();
    while value > 0 {
        pos -= 1;
        buf[pos] = DIGITS[(value % base) as usize];
        value /= base;
    }

    buf[pos..].iter().map(|&b| char::from(b)).collect()
}

/// Format a signed 64-bit integer in the given radix
///
/// ```
/// use strkit::numeric::{format_signed, Radix};
///
/// assert_eq!(format_signed(-123456789, Radix::Decimal), "-123456789");
/// assert_eq!(format_signed(0xabcdef, Radix::Hex), "abcdef");
/// assert_eq!(format_signed(-1, Radix::Binary), "-1");
/// ```
pub fn format_signed(value: i64, radix: Radix) -> String {
    let magnitude = format_magnitude(value.unsigned_abs(), radix);
    if value < 0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Format an unsigned 64-bit integer in the given radix
pub fn format_unsigned(value: u64, radix: Radix) -> String {
    format_magnitude(value, radix)
}

/// Format a double with exactly `decimal_places` fractional digits
///
/// Digits beyond `decimal_places` are cut off (truncation toward zero)
/// from the shortest decimal text that round-trips to `value`, so
/// `199.23490776` at five places is `"199.23490"`. No separator is emitted
/// when `decimal_places` is zero. Negative values keep their sign even when
/// the kept digits are all zero.
///
/// ```
/// use strkit::numeric::format_float;
///
/// assert_eq!(format_float(199.234, 2), "199.23");
/// assert_eq!(format_float(-1.0001, 1), "-1.0");
/// assert_eq!(format_float(0.0, 0), "0");
/// ```
pub fn format_float(value: f64, decimal_places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // Display for f64 never switches to exponent notation
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut out = String::with_capacity(int_part.len() + decimal_places + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(int_part);
    if decimal_places > 0 {
        out.push('.');
        out.extend(
            frac_part
                .chars()
                .chain(std::iter::repeat('0'))
                .take(decimal_places),
        );
    }
    out
}

/// Format a 32-bit status code
///
/// Codes with the high bit set (failure codes) are shown as `0x` followed by
/// eight lowercase hex digits, everything else in decimal.
pub fn format_error_code(code: u32) -> String {
    if code & 0x8000_0000 == 0 {
        code.to_string()
    } else {
        format!("0x{code:08x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_signed_decimal() {
        assert_eq!(format_signed(0, Radix::Decimal), "0");
        assert_eq!(format_signed(1, Radix::Decimal), "1");
        assert_eq!(format_signed(-1, Radix::Decimal), "-1");
        assert_eq!(
            format_signed(1234567890987654321, Radix::Decimal),
            "1234567890987654321"
        );
        assert_eq!(
            format_signed(-1234567890987654321, Radix::Decimal),
            "-1234567890987654321"
        );
        assert_eq!(
            format_signed(i64::MIN, Radix::Decimal),
            "-9223372036854775808"
        );
    }

    #[test]
    fn test_format_signed_other_radices() {
        assert_eq!(format_signed(0xabcdef, Radix::Hex), "abcdef");
        assert_eq!(format_signed(0x101fff, Radix::Hex), "101fff");
        assert_eq!(format_signed(0x999999, Radix::Hex), "999999");
        assert_eq!(format_signed(0, Radix::Hex), "0");

        assert_eq!(format_signed(0o1234, Radix::Octal), "1234");
        assert_eq!(format_signed(0, Radix::Octal), "0");
        assert_eq!(format_signed(0o777, Radix::Octal), "777");
        assert_eq!(format_signed(0o123456, Radix::Octal), "123456");

        assert_eq!(format_signed(0, Radix::Binary), "0");
        assert_eq!(format_signed(0xf, Radix::Binary), "1111");
        assert_eq!(format_signed(0x5ad1, Radix::Binary), "101101011010001");
        assert_eq!(format_signed(-1, Radix::Binary), "-1");
        assert_eq!(format_signed(i64::MIN, Radix::Hex), "-8000000000000000");
    }

    #[test]
    fn test_format_unsigned() {
        assert_eq!(
            format_unsigned(18446744073709551615, Radix::Decimal),
            "18446744073709551615"
        );
        assert_eq!(format_unsigned(u64::MAX, Radix::Hex), "ffffffffffffffff");
        assert_eq!(format_unsigned(0o123456, Radix::Octal), "123456");
        assert_eq!(format_unsigned(0x5ad1, Radix::Binary), "101101011010001");
        assert_eq!(format_unsigned(0, Radix::Binary), "0");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.234, 1), "1.2");
        assert_eq!(format_float(0.0, 0), "0");
        assert_eq!(format_float(0.0, 2), "0.00");
        assert_eq!(format_float(199.234, 2), "199.23");
        assert_eq!(format_float(-199.234, 2), "-199.23");
        assert_eq!(format_float(199.23490776, 5), "199.23490");
        assert_eq!(format_float(-1.0001, 1), "-1.0");
        assert_eq!(format_float(123456789.987654321, 3), "123456789.987");
    }

    #[test]
    fn test_format_float_truncates_extra_digits() {
        assert_eq!(format_float(0.3, 1), "0.3");
        assert_eq!(format_float(2.99, 1), "2.9");
        assert_eq!(format_float(-2.99, 0), "-2");
        assert_eq!(format_float(1.5, 4), "1.5000");
        assert_eq!(format_float(1e20, 1), "100000000000000000000.0");
    }

    #[test]
    fn test_format_float_negative_truncating_to_zero() {
        assert_eq!(format_float(-0.001, 1), "-0.0");
    }

    #[test]
    fn test_format_float_negative_zero_has_no_sign() {
        assert_eq!(format_float(-0.0, 2), "0.00");
        assert_eq!(format_float(-0.0, 0), "0");
    }

    #[test]
    fn test_format_float_non_finite() {
        assert_eq!(format_float(f64::NAN, 2), "NaN");
        assert_eq!(format_float(f64::INFINITY, 2), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY, 0), "-inf");
    }

    #[test]
    fn test_format_error_code() {
        assert_eq!(format_error_code(u32::MAX), "0xffffffff");
        assert_eq!(format_error_code(0), "0");
        assert_eq!(format_error_code(567), "567");
        assert_eq!(format_error_code(0x7fffffff), "2147483647");
        assert_eq!(format_error_code(0x80000000), "0x80000000");
        assert_eq!(format_error_code(0x80000001), "0x80000001");
        assert_eq!(format_error_code(0x8fffffff), "0x8fffffff");
    }

    #[test]
    fn test_radix_from_base() {
        assert_eq!(Radix::from_base(16), Some(Radix::Hex));
        assert_eq!(Radix::from_base(3), None);
        assert_eq!(Radix::Octal.to_string(), "8");
    }
}
