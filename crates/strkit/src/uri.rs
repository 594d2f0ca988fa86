//! `file:` URI to local path conversion
//!
//! Accepted shapes (scheme matched case-insensitively):
//!
//! ```text
//! file:///c:/dir/file.txt      drive after an empty authority
//! file://c:/dir/file.txt       drive in the authority position
//! file://c|/dir/file.txt       legacy `|` in place of `:`
//! file://server/share/file     host, converted to a UNC path
//! file:///usr/share/file       plain absolute path (POSIX style)
//! ```
//!
//! The query is dropped. Percent escapes are decoded except where the
//! decoded character could not appear in a path component of the target
//! style; those stay escaped so the file system can reject them later.

use crate::error::{ParseError, Result};
use crate::replace::{ReplaceLimit, replace_all};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Target path syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PathStyle {
    /// Drive letters, `\` separators, `\\host\share` for remote paths
    #[default]
    Windows,
    /// `/` separators, `//host/...` for remote paths
    Posix,
}

impl PathStyle {
    /// Whether a decoded byte must stay escaped in this style
    fn keeps_escaped(self, byte: u8) -> bool {
        if byte < 0x20 || byte == 0x7f || byte == b'/' {
            return true;
        }
        match self {
            Self::Windows => matches!(
                byte,
                b'<' | b'>' | b':' | b'"' | b'|' | b'?' | b'*' | b'\\' | b'`'
            ),
            Self::Posix => false,
        }
    }
}

/// Split off a URI scheme
///
/// A drive letter in scheme position is a native path and reported as an
/// unsupported scheme.
fn split_scheme(uri: &str) -> Result<(&str, &str)> {
    let Some((scheme, rest)) = uri.split_once(':') else {
        return Err(ParseError::malformed_uri(uri, "missing scheme"));
    };

    if scheme.len() == 1 && scheme.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(ParseError::UnsupportedScheme(scheme.to_string()));
    }

    let valid = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid {
        return Err(ParseError::malformed_uri(uri, "missing scheme"));
    }
    Ok((scheme, rest))
}

/// `c:` or `c|`
fn drive_letter(segment: &str) -> Option<char> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(':' | '|'), None) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

/// Decode `%XX` triplets, keeping escaped what `style` cannot hold
///
/// Runs of escaped non-ASCII bytes are decoded together and kept in their
/// escaped form when they are not valid UTF-8.
fn decode_path(path: &str, style: PathStyle) -> String {
    fn flush(out: &mut String, bytes: &mut Vec<u8>, raw: &mut String) {
        if bytes.is_empty() {
            return;
        }
        match std::str::from_utf8(bytes) {
            Ok(text) => out.push_str(text),
            Err(_) => {
                trace!("keeping undecodable escape sequence {raw}");
                out.push_str(raw);
            }
        }
        bytes.clear();
        raw.clear();
    }

    let mut out = String::with_capacity(path.len());
    let mut pending = Vec::new();
    let mut pending_raw = String::new();
    let mut rest = path;

    while let Some(c) = rest.chars().next() {
        let triplet = rest
            .get(..3)
            .filter(|t| t.starts_with('%') && t[1..].bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|t| u8::from_str_radix(&t[1..], 16).ok().map(|b| (t, b)));

        match triplet {
            Some((raw, byte)) if byte >= 0x80 => {
                pending.push(byte);
                pending_raw.push_str(raw);
                rest = &rest[3..];
            }
            Some((raw, byte)) => {
                flush(&mut out, &mut pending, &mut pending_raw);
                if style.keeps_escaped(byte) {
                    trace!("keeping {raw} escaped");
                    out.push_str(raw);
                } else {
                    out.push(char::from(byte));
                }
                rest = &rest[3..];
            }
            None => {
                flush(&mut out, &mut pending, &mut pending_raw);
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    flush(&mut out, &mut pending, &mut pending_raw);
    out
}

/// Convert a `file:` URI to a Windows-style local path
///
/// ```
/// use std::path::PathBuf;
/// use strkit::uri::file_uri_to_local_path;
///
/// assert_eq!(
///     file_uri_to_local_path("file:///d:/path%20with%20spaces/test.txt").unwrap(),
///     PathBuf::from("d:\\path with spaces\\test.txt")
/// );
/// ```
///
/// # Errors
///
/// - [`ParseError::UnsupportedScheme`] for any scheme other than `file`
/// - [`ParseError::MalformedUri`] for text that is not a URI, a `file:` URI
///   without `//`, or one with an empty path
pub fn file_uri_to_local_path(uri: &str) -> Result<PathBuf> {
    file_uri_to_local_path_with(uri, PathStyle::Windows)
}

/// Convert a `file:` URI to a local path in the given style
pub fn file_uri_to_local_path_with(uri: &str, style: PathStyle) -> Result<PathBuf> {
    let (scheme, rest) = split_scheme(uri)?;
    if !scheme.eq_ignore_ascii_case("file") {
        return Err(ParseError::UnsupportedScheme(scheme.to_string()));
    }

    let Some(rest) = rest.strip_prefix("//") else {
        return Err(ParseError::malformed_uri(uri, "expected '//' after 'file:'"));
    };
    let rest = rest.split_once('?').map_or(rest, |(before, _)| before);

    let (authority, path) = rest.find('/').map_or((rest, ""), |i| rest.split_at(i));

    // A drive in the authority position belongs to the path
    let (host, path) = match drive_letter(authority) {
        Some(_) => ("", rest),
        None if authority.eq_ignore_ascii_case("localhost") => ("", path),
        None => (authority, path),
    };

    // A remote path keeps its leading separator for the share
    let path = if host.is_empty() {
        path.trim_start_matches('/')
    } else {
        path
    };
    if path.trim_matches('/').is_empty() {
        return Err(ParseError::malformed_uri(uri, "empty path"));
    }

    let decoded = decode_path(path, style);
    let local = match style {
        PathStyle::Windows => windows_path(host, &decoded),
        PathStyle::Posix => posix_path(host, &decoded),
    };

    debug!("converted {uri} to {local}");
    Ok(PathBuf::from(local))
}

fn windows_path(host: &str, path: &str) -> String {
    let (separated, _) = replace_all(path, "/", "\\", ReplaceLimit::Unbounded);
    if !host.is_empty() {
        return format!("\\\\{host}{separated}");
    }

    let mut local = separated;
    // `c|` is the legacy spelling of `c:`
    if local.get(1..2) == Some("|") && drive_letter(&local[..2]).is_some() {
        local.replace_range(1..2, ":");
    }
    local
}

fn posix_path(host: &str, path: &str) -> String {
    if host.is_empty() {
        format!("/{path}")
    } else {
        format!("//{host}{path}")
    }
}

/// Normalize an absolute URI so its path is at least `/`
///
/// A path made only of slashes collapses to a single `/`.
///
/// # Errors
///
/// [`ParseError::MalformedUri`] when `text` is not an absolute URI.
pub fn absolute_uri(text: &str) -> Result<String> {
    let mut url =
        url::Url::parse(text).map_err(|err| ParseError::malformed_uri(text, err.to_string()))?;

    if !url.cannot_be_a_base() && url.path().chars().all(|c| c == '/') {
        url.set_path("/");
    }
    Ok(url.to_string())
}
