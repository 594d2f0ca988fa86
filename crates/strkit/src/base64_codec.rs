//! Base64 encoding over the standard and URL-safe alphabets

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};

/// Base64 alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alphabet {
    /// RFC 4648 standard alphabet (`+` and `/`)
    #[default]
    Standard,
    /// RFC 4648 URL and filename safe alphabet (`-` and `_`)
    UrlSafe,
}

/// Whether `=` padding is written and required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Padding {
    /// Output padded to a multiple of four characters
    #[default]
    Padded,
    /// No trailing `=`
    Unpadded,
}

fn engine(alphabet: Alphabet, padding: Padding) -> &'static general_purpose::GeneralPurpose {
    match (alphabet, padding) {
        (Alphabet::Standard, Padding::Padded) => &general_purpose::STANDARD,
        (Alphabet::Standard, Padding::Unpadded) => &general_purpose::STANDARD_NO_PAD,
        (Alphabet::UrlSafe, Padding::Padded) => &general_purpose::URL_SAFE,
        (Alphabet::UrlSafe, Padding::Unpadded) => &general_purpose::URL_SAFE_NO_PAD,
    }
}

/// Encode with the standard alphabet and `=` padding
///
/// ```
/// use strkit::base64_codec::encode;
///
/// assert_eq!(encode(b"what"), "d2hhdA==");
/// assert_eq!(encode(b""), "");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    encode_with(bytes, Alphabet::Standard, Padding::Padded)
}

/// Decode padded standard-alphabet text
///
/// # Errors
///
/// Returns [`crate::ParseError::InvalidFormat`] for characters outside the
/// alphabet, bad padding, or a truncated final group.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    decode_with(text, Alphabet::Standard, Padding::Padded)
}

/// Encode with an explicit alphabet and padding mode
pub fn encode_with(bytes: &[u8], alphabet: Alphabet, padding: Padding) -> String {
    engine(alphabet, padding).encode(bytes)
}

/// Decode with an explicit alphabet and padding mode
pub fn decode_with(text: &str, alphabet: Alphabet, padding: Padding) -> Result<Vec<u8>> {
    Ok(engine(alphabet, padding).decode(text)?)
}

/// Upper bound of decoded bytes for `encoded_len` characters of padded input
pub const fn decoded_len_estimate(encoded_len: usize) -> usize {
    encoded_len * 3 / 4
}
