//! Error types for strict parsing, decoding, and URI conversion

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Syntax that an input failed to conform to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Hexadecimal byte text
    Hex,
    /// Base64 text
    Base64,
    /// UTF-8 byte sequence
    Utf8,
    /// UTF-16 code unit sequence
    Utf16,
    /// Single-byte or multi-byte code page text
    CodePage,
    /// Integer in a fixed radix
    Integer,
    /// Three-valued flag
    Tristate,
    /// `name<sep>value` pair
    NameValue,
    /// URI text
    Uri,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
            Self::CodePage => "code page",
            Self::Integer => "integer",
            Self::Tristate => "tristate",
            Self::NameValue => "name/value pair",
            Self::Uri => "URI",
        };
        f.write_str(name)
    }
}

/// Errors returned by the strict entry points of this crate
///
/// Lenient functions (`parse_int`, `parse_double`, ...) never produce these;
/// they fall back to a default value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not follow the expected syntax
    #[error("Invalid {format}: {reason}")]
    InvalidFormat {
        /// Syntax that was expected
        format: Format,
        /// What was wrong with the input
        reason: String,
    },

    /// Numeric value is above the target range
    #[error("Value overflows target range (clamped to {clamped})")]
    Overflow {
        /// Upper bound of the target type
        clamped: i128,
    },

    /// Numeric value is below the target range
    #[error("Value underflows target range (clamped to {clamped})")]
    Underflow {
        /// Lower bound of the target type
        clamped: i128,
    },

    /// URI uses a scheme other than the one required
    #[error("Unsupported URI scheme: {0}")]
    UnsupportedScheme(String),

    /// URI is structurally unusable
    #[error("Malformed URI '{uri}': {reason}")]
    MalformedUri {
        /// The rejected URI
        uri: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ParseError {
    /// Build an `InvalidFormat` error
    pub fn invalid(format: Format, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format,
            reason: reason.into(),
        }
    }

    /// Build a `MalformedUri` error
    pub fn malformed_uri(uri: &str, reason: impl Into<String>) -> Self {
        Self::MalformedUri {
            uri: uri.to_string(),
            reason: reason.into(),
        }
    }

    /// Bound the value was clamped to, for range errors
    #[must_use]
    pub const fn clamped(&self) -> Option<i128> {
        match self {
            Self::Overflow { clamped } | Self::Underflow { clamped } => Some(*clamped),
            _ => None,
        }
    }

    /// Whether this is a range error rather than a syntax error
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::Overflow { .. } | Self::Underflow { .. })
    }
}

impl From<hex::FromHexError> for ParseError {
    fn from(err: hex::FromHexError) -> Self {
        Self::invalid(Format::Hex, err.to_string())
    }
}

impl From<base64::DecodeError> for ParseError {
    fn from(err: base64::DecodeError) -> Self {
        Self::invalid(Format::Base64, err.to_string())
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::invalid(Format::Utf8, err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ParseError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::invalid(Format::Utf8, err.utf8_error().to_string())
    }
}

impl From<std::char::DecodeUtf16Error> for ParseError {
    fn from(err: std::char::DecodeUtf16Error) -> Self {
        Self::invalid(Format::Utf16, err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ParseError>;
