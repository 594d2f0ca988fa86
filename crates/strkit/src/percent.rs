//! Percent-encoding of UTF-8 text
//!
//! Two escape sets are offered:
//!
//! - [`escape`] keeps only RFC 3986 unreserved characters (alphanumerics and
//!   `-_.~`) and optionally the reserved delimiters.
//! - [`encode_utf8_url`] is narrower and only escapes control bytes,
//!   non-ASCII bytes and characters that are unsafe inside a URL
//!   (space, `"<>&^{}|\[]` and the backtick).
//!
//! Escapes are written with uppercase hex digits. Decoding leaves a `%`
//! that is not followed by two hex digits untouched.

use crate::error::Result;
use percent_encoding::{
    AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode,
};

/// Everything except alphanumerics and `-_.~`
const ESCAPE_ALL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// [`ESCAPE_ALL`] minus the RFC 3986 reserved characters
const ESCAPE_UNRESERVED_ONLY: &AsciiSet = &ESCAPE_ALL
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

const URL_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'^')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'[')
    .add(b']')
    .add(b'`');

/// Percent-encode the UTF-8 bytes of `text`
///
/// With `escape_reserved_uri_chars` set, every byte outside the unreserved
/// set is escaped. Without it the reserved delimiters `:/?#[]@!$&'()*+,;=`
/// are left as they are. `%` is escaped either way.
///
/// ```
/// use strkit::percent::escape;
///
/// assert_eq!(escape("foo.test path?app=1", false), "foo.test%20path?app=1");
/// assert_eq!(escape("a/b", true), "a%2Fb");
/// ```
pub fn escape(text: &str, escape_reserved_uri_chars: bool) -> String {
    let set = if escape_reserved_uri_chars {
        ESCAPE_ALL
    } else {
        ESCAPE_UNRESERVED_ONLY
    };
    utf8_percent_encode(text, set).to_string()
}

/// Decode `%XX` escapes and interpret the result as UTF-8
///
/// # Errors
///
/// [`crate::ParseError::InvalidFormat`] when the decoded bytes are not UTF-8.
pub fn unescape(text: &str) -> Result<String> {
    Ok(percent_decode_str(text).decode_utf8()?.into_owned())
}

/// Encode text as a URL-safe UTF-8 string
///
/// `%` itself is not escaped, so text that already contains escape
/// sequences does not survive a round trip unchanged.
pub fn encode_utf8_url(text: &str) -> String {
    utf8_percent_encode(text, URL_UNSAFE).to_string()
}

/// Inverse of [`encode_utf8_url`]
pub fn decode_utf8_url(text: &str) -> Result<String> {
    unescape(text)
}
