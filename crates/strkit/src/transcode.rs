//! Conversions between UTF-8, UTF-16 and legacy code pages
//!
//! UTF-8 text is carried as `&[u8]`/`&str`, UTF-16 as `&[u16]`, and legacy
//! "ANSI" text as `&[u8]` tagged with a [`CodePage`]. Malformed input is
//! rejected with an error that reports where decoding stopped; nothing is
//! silently replaced with U+FFFD.
//!
//! The one deliberately lossy conversion is [`wide_to_ansi_direct`], which
//! keeps the low byte of every code unit.

use crate::case::CaseTable;
use crate::error::{Format, ParseError, Result};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Legacy code page used for ANSI text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodePage {
    /// ISO-8859-1, every byte maps to the code point of the same value
    Latin1,
    /// UTF-8 (65001)
    Utf8,
    /// Western European (1252)
    Windows1252,
    /// Simplified Chinese GBK, a superset of GB2312 (936)
    Gbk,
    /// Traditional Chinese Big5 (950)
    Big5,
    /// Japanese Shift_JIS (932)
    ShiftJis,
    /// Korean EUC-KR (949)
    EucKr,
    /// Cyrillic (1251)
    Windows1251,
}

impl CodePage {
    /// Map a numeric Windows code page identifier
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            28591 => Some(Self::Latin1),
            65001 => Some(Self::Utf8),
            1252 => Some(Self::Windows1252),
            936 | 20936 => Some(Self::Gbk),
            950 => Some(Self::Big5),
            932 => Some(Self::ShiftJis),
            949 => Some(Self::EucKr),
            1251 => Some(Self::Windows1251),
            _ => None,
        }
    }

    /// Numeric Windows code page identifier
    pub const fn id(self) -> u32 {
        match self {
            Self::Latin1 => 28591,
            Self::Utf8 => 65001,
            Self::Windows1252 => 1252,
            Self::Gbk => 936,
            Self::Big5 => 950,
            Self::ShiftJis => 932,
            Self::EucKr => 949,
            Self::Windows1251 => 1251,
        }
    }

    /// Backing `encoding_rs` encoding, `None` for Latin-1 which is handled
    /// byte for byte
    fn encoding(self) -> Option<&'static Encoding> {
        match self {
            Self::Latin1 => None,
            Self::Utf8 => Some(encoding_rs::UTF_8),
            Self::Windows1252 => Some(encoding_rs::WINDOWS_1252),
            Self::Gbk => Some(encoding_rs::GBK),
            Self::Big5 => Some(encoding_rs::BIG5),
            Self::ShiftJis => Some(encoding_rs::SHIFT_JIS),
            Self::EucKr => Some(encoding_rs::EUC_KR),
            Self::Windows1251 => Some(encoding_rs::WINDOWS_1251),
        }
    }
}

/// Decode UTF-8 bytes into UTF-16 code units
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] with the byte offset of the first malformed
/// sequence.
pub fn utf8_to_utf16(bytes: &[u8]) -> Result<Vec<u16>> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.encode_utf16().collect())
}

/// Decode UTF-16 code units into a `String`
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] naming the index of the first unpaired
/// surrogate.
pub fn utf16_to_string(units: &[u16]) -> Result<String> {
    let mut out = String::with_capacity(units.len());
    let mut index = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                index += c.len_utf16();
                out.push(c);
            }
            Err(err) => {
                return Err(ParseError::invalid(
                    Format::Utf16,
                    format!(
                        "unpaired surrogate {:#06x} at unit {index}",
                        err.unpaired_surrogate()
                    ),
                ));
            }
        }
    }
    Ok(out)
}

/// Encode UTF-16 code units as UTF-8 bytes
///
/// ```
/// use strkit::transcode::utf16_to_utf8;
///
/// let units: Vec<u16> = "_\u{266B}_\u{416}_".encode_utf16().collect();
/// assert_eq!(utf16_to_utf8(&units).unwrap().len(), 8);
/// ```
pub fn utf16_to_utf8(units: &[u16]) -> Result<Vec<u8>> {
    utf16_to_string(units).map(String::into_bytes)
}

/// Decode a UTF-8 buffer that may carry a NUL terminator
///
/// Conversion stops at the first NUL byte; anything after it is ignored.
pub fn utf8_buffer_to_utf16(buffer: &[u8]) -> Result<Vec<u16>> {
    let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    utf8_to_utf16(&buffer[..end])
}

/// Decode ANSI bytes in `code_page` into UTF-16 code units
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] when the bytes are not valid in the code
/// page.
pub fn ansi_to_wide(bytes: &[u8], code_page: CodePage) -> Result<Vec<u16>> {
    let Some(encoding) = code_page.encoding() else {
        return Ok(bytes.iter().map(|&b| u16::from(b)).collect());
    };

    let decoded = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| {
            ParseError::invalid(
                Format::CodePage,
                format!("malformed {} input", encoding.name()),
            )
        })?;
    Ok(decoded.encode_utf16().collect())
}

/// Encode UTF-16 code units as ANSI bytes in `code_page`
///
/// # Errors
///
/// [`ParseError::InvalidFormat`] for unpaired surrogates or for characters
/// the code page cannot represent.
pub fn wide_to_ansi(units: &[u16], code_page: CodePage) -> Result<Vec<u8>> {
    let Some(encoding) = code_page.encoding() else {
        return units
            .iter()
            .enumerate()
            .map(|(i, &unit)| {
                u8::try_from(unit).map_err(|_| {
                    ParseError::invalid(
                        Format::CodePage,
                        format!("unit {unit:#06x} at {i} is not in Latin-1"),
                    )
                })
            })
            .collect();
    };

    let text = utf16_to_string(units)?;
    let (encoded, _, had_errors) = encoding.encode(&text);
    if had_errors {
        return Err(ParseError::invalid(
            Format::CodePage,
            format!("text has characters not representable in {}", encoding.name()),
        ));
    }
    Ok(encoded.into_owned())
}

/// Narrow each UTF-16 unit to its low byte
///
/// Units 0..=255 convert exactly. Larger units lose their high byte, which
/// is only meaningful for text already known to be Latin-1.
pub fn wide_to_ansi_direct(units: &[u16]) -> Vec<u8> {
    let truncated = units.iter().filter(|&&u| u > 0xff).count();
    if truncated > 0 {
        debug!("direct narrowing dropped the high byte of {truncated} units");
    }
    units.iter().map(|&u| u.to_le_bytes()[0]).collect()
}

/// Lowercase each code unit through `table`
///
/// Surrogates and units whose lowercase form needs a different number of
/// UTF-16 units are left unchanged.
pub fn lowercase_units(units: &[u16], table: &impl CaseTable) -> Vec<u16> {
    units
        .iter()
        .map(|&unit| {
            let Some(c) = char::from_u32(u32::from(unit)) else {
                return unit;
            };
            let lower = table.lowercase(c);
            let mut buf = [0u16; 2];
            match lower.encode_utf16(&mut buf) {
                [single] => *single,
                _ => unit,
            }
        })
        .collect()
}

/// Whether every unit is 7-bit ASCII
pub fn contains_only_ascii(units: &[u16]) -> bool {
    units.iter().all(|&u| u < 0x80)
}

/// Whether `text` is 7-bit ASCII
pub fn contains_only_ascii_str(text: &str) -> bool {
    text.is_ascii()
}
