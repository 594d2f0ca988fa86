//! Hexadecimal byte text

use crate::error::{Format, ParseError, Result};

/// Encode bytes as lowercase hex, two digits per byte in input order
///
/// ```
/// use strkit::hex_codec::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x00, 0x7f, 0xff]), "007fff");
/// assert_eq!(bytes_to_hex(&[]), "");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex text into bytes
///
/// Upper and lower case digits are both accepted. Empty text decodes to an
/// empty vector.
///
/// # Errors
///
/// Returns [`ParseError::InvalidFormat`] for odd-length text or any
/// character that is not a hex digit.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    hex::decode(text).map_err(|err| {
        ParseError::invalid(Format::Hex, format!("{err} in {} chars", text.len()))
    })
}

/// Value of an ASCII hex digit, `None` for anything else
pub fn hex_digit_to_int(c: char) -> Option<u8> {
    // to_digit accepts radix 16 digits only in ASCII
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

/// Whether `c` is an ASCII hex digit
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
