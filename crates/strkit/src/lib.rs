//! Text and byte codecs, parsers and replace utilities
//!
//! This crate collects the string plumbing an updater or installer client
//! needs when it talks to servers, reads configuration, and maps download
//! URIs onto the local file system.
//!
//! # Components
//!
//! - **Numeric formatting**: radix integers, fixed-place doubles, status codes
//! - **Parsing**: lenient `atoi`-style parsing next to strict, range-checked
//!   parsing with typed errors
//! - **Codecs**: hex, Base64, percent-encoding, UTF-8/UTF-16 and legacy code
//!   pages
//! - **Replace**: bounded non-overlapping replacement with counts
//! - **URIs**: `file:` URI to local path conversion
//! - **Text helpers**: case-aware comparison, line splitting, message
//!   templates
//!
//! Every operation is a pure function of its arguments. Strict operations
//! return [`Result`] and never consult or set shared error state.
//!
//! # Examples
//!
//! ## Strict and lenient parsing
//!
//! ```
//! use strkit::parse::{parse_decimal_int_checked, parse_int};
//! use strkit::ParseError;
//!
//! // Lenient: trailing garbage is ignored, no digits means 0
//! assert_eq!(parse_int(" 122abc"), 122);
//! assert_eq!(parse_int("a"), 0);
//!
//! // Strict: the whole input must be a decimal integer in range
//! assert!(parse_decimal_int_checked("9nine").is_err());
//! assert_eq!(
//!     parse_decimal_int_checked("-2147483649"),
//!     Err(ParseError::Underflow { clamped: -2147483648 })
//! );
//! ```
//!
//! ## Codecs
//!
//! ```
//! use strkit::{base64_codec, hex_codec, percent};
//!
//! assert_eq!(hex_codec::bytes_to_hex(&[0xde, 0xad]), "dead");
//! assert_eq!(base64_codec::encode(b"foobar"), "Zm9vYmFy");
//! assert_eq!(percent::escape("a b/c", true), "a%20b%2Fc");
//! ```
//!
//! ## File URIs
//!
//! ```
//! use strkit::uri::file_uri_to_local_path;
//!
//! let path = file_uri_to_local_path("file:///c:/test/path/one/test.txt").unwrap();
//! assert_eq!(path.to_string_lossy(), "c:\\test\\path\\one\\test.txt");
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod base64_codec;
pub mod case;
pub mod compare;
pub mod error;
pub mod hex_codec;
pub mod lines;
pub mod message;
pub mod numeric;
pub mod parse;
pub mod percent;
pub mod replace;
pub mod transcode;
pub mod uri;

pub use error::{Format, ParseError, Result};

// Re-export commonly used types
pub use case::{AsciiCaseTable, CaseTable, UnicodeCaseTable};
pub use compare::CaseSensitivity;
pub use message::{InMemoryCatalog, MessageCatalog};
pub use numeric::Radix;
pub use parse::Tristate;
pub use replace::ReplaceLimit;
pub use transcode::CodePage;
pub use uri::PathStyle;
