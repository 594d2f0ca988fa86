//! Subcommands and their handlers

use crate::config::{RadixArg, StyleArg};
use crate::error::CommandError;
use clap::Subcommand;
use serde::Serialize;
use std::io::Read;
use strkit::base64_codec::{self, Alphabet, Padding};
use strkit::compare::CaseSensitivity;
use strkit::replace::{self, ReplaceLimit};
use strkit::{PathStyle, Tristate, UnicodeCaseTable, hex_codec, numeric, parse, percent, uri};
use tracing::debug;

/// Top-level subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Hex encode or decode
    #[command(subcommand)]
    Hex(HexCommands),

    /// Base64 encode or decode
    #[command(subcommand)]
    Base64(Base64Commands),

    /// Percent-encode text
    Escape {
        /// Text to encode (read from stdin when omitted)
        input: Option<String>,

        /// Also escape reserved URI delimiters such as `/` and `?`
        #[arg(short, long)]
        reserved: bool,
    },

    /// Decode percent-encoded text
    Unescape {
        /// Text to decode (read from stdin when omitted)
        input: Option<String>,
    },

    /// Convert a `file:` URI to a local path
    UriToPath {
        /// URI to convert (read from stdin when omitted)
        input: Option<String>,

        /// Target path syntax (defaults to --path-style)
        #[arg(short, long, value_enum)]
        style: Option<StyleArg>,
    },

    /// Replace occurrences of a substring
    Replace {
        /// Text to search (read from stdin when omitted)
        input: Option<String>,

        /// Substring to look for
        #[arg(short, long)]
        needle: String,

        /// Replacement text
        #[arg(short, long = "with")]
        with: String,

        /// Replace at most this many occurrences
        #[arg(short, long)]
        max: Option<usize>,

        /// Match regardless of case
        #[arg(short, long)]
        ignore_case: bool,
    },

    /// Format a signed integer in a radix
    FormatInt {
        /// Value to format
        #[arg(allow_hyphen_values = true)]
        value: i64,

        /// Output radix
        #[arg(short, long, value_enum, default_value = "decimal")]
        radix: RadixArg,
    },

    /// Parse an integer
    ParseInt {
        /// Text to parse (read from stdin when omitted)
        #[arg(allow_hyphen_values = true)]
        input: Option<String>,

        /// Reject anything but an in-range decimal `i32`
        #[arg(short, long, conflicts_with = "radix")]
        strict: bool,

        /// Parse strictly as a signed 64-bit value in this radix
        #[arg(short, long, value_enum)]
        radix: Option<RadixArg>,
    },

    /// Parse a tristate flag (`0`, `1` or `2`)
    Tristate {
        /// Text to parse (read from stdin when omitted)
        input: Option<String>,
    },
}

impl Commands {
    /// Name used in logs, errors and JSON output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex(HexCommands::Encode { .. }) => "hex-encode",
            Self::Hex(HexCommands::Decode { .. }) => "hex-decode",
            Self::Base64(Base64Commands::Encode { .. }) => "base64-encode",
            Self::Base64(Base64Commands::Decode { .. }) => "base64-decode",
            Self::Escape { .. } => "escape",
            Self::Unescape { .. } => "unescape",
            Self::UriToPath { .. } => "uri-to-path",
            Self::Replace { .. } => "replace",
            Self::FormatInt { .. } => "format-int",
            Self::ParseInt { .. } => "parse-int",
            Self::Tristate { .. } => "tristate",
        }
    }
}

/// Hex subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum HexCommands {
    /// Encode the UTF-8 bytes of the input as lowercase hex
    Encode {
        /// Text to encode (read from stdin when omitted)
        input: Option<String>,
    },
    /// Decode hex into UTF-8 text
    Decode {
        /// Hex to decode (read from stdin when omitted)
        input: Option<String>,
    },
}

/// Base64 subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Base64Commands {
    /// Encode the UTF-8 bytes of the input
    Encode {
        /// Text to encode (read from stdin when omitted)
        input: Option<String>,

        #[command(flatten)]
        variant: Base64Variant,
    },
    /// Decode Base64 into UTF-8 text
    Decode {
        /// Base64 to decode (read from stdin when omitted)
        input: Option<String>,

        #[command(flatten)]
        variant: Base64Variant,
    },
}

/// Base64 alphabet and padding flags
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Base64Variant {
    /// Use the URL-safe alphabet
    #[arg(long)]
    pub url_safe: bool,

    /// Omit `=` padding
    #[arg(long)]
    pub no_pad: bool,
}

impl Base64Variant {
    const fn alphabet(self) -> Alphabet {
        if self.url_safe {
            Alphabet::UrlSafe
        } else {
            Alphabet::Standard
        }
    }

    const fn padding(self) -> Padding {
        if self.no_pad {
            Padding::Unpadded
        } else {
            Padding::Padded
        }
    }
}

/// Result of a command, rendered by [`crate::output`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Subcommand that produced the value
    pub operation: &'static str,
    /// Produced text
    pub value: String,
    /// Number of replacements, for `replace`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Outcome {
    fn new(operation: &'static str, value: impl Into<String>) -> Self {
        Self {
            operation,
            value: value.into(),
            count: None,
        }
    }
}

/// Use the positional input, or read all of `stdin` with one trailing
/// newline removed
fn resolve_input(input: Option<&str>, stdin: &mut impl Read) -> Result<String, CommandError> {
    if let Some(text) = input {
        return Ok(text.to_string());
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    debug!("read {} bytes of input from stdin", buf.len());
    Ok(buf)
}

fn into_text(bytes: Vec<u8>) -> Result<String, CommandError> {
    String::from_utf8(bytes).map_err(|err| CommandError::NotText(err.as_bytes().len()))
}

/// Run `command`, taking missing input from `stdin`
///
/// # Errors
///
/// Returns `CommandError` when stdin cannot be read or the library rejects
/// the input.
pub fn run(
    command: &Commands,
    default_style: PathStyle,
    stdin: &mut impl Read,
) -> Result<Outcome, CommandError> {
    let outcome = match command {
        Commands::Hex(HexCommands::Encode { input }) => {
            let text = resolve_input(input.as_deref(), stdin)?;
            Outcome::new(command.name(), hex_codec::bytes_to_hex(text.as_bytes()))
        }
        Commands::Hex(HexCommands::Decode { input }) => {
            let text = resolve_input(input.as_deref(), stdin)?;
            let bytes = hex_codec::hex_to_bytes(text.trim())?;
            Outcome::new(command.name(), into_text(bytes)?)
        }
        Commands::Base64(Base64Commands::Encode { input, variant }) => {
            let text = resolve_input(input.as_deref(), stdin)?;
            let encoded =
                base64_codec::encode_with(text.as_bytes(), variant.alphabet(), variant.padding());
            Outcome::new(command.name(), encoded)
        }
        Commands::Base64(Base64Commands::Decode { input, variant }) => {
            let text = resolve_input(input.as_deref(), stdin)?;
            let bytes =
                base64_codec::decode_with(text.trim(), variant.alphabet(), variant.padding())?;
            Outcome::new(command.name(), into_text(bytes)?)
        }
        Commands::Escape { input, reserved } => {
            let text = resolve_input(input.as_deref(), stdin)?;
            Outcome::new(command.name(), percent::escape(&text, *reserved))
        }
        Commands::Unescape { input } => {
            let text = resolve_input(input.as_deref(), stdin)?;
            Outcome::new(command.name(), percent::unescape(&text)?)
        }
        Commands::UriToPath { input, style } => {
            let text = resolve_input(input.as_deref(), stdin)?;
            let style = style.map_or(default_style, PathStyle::from);
            let path = uri::file_uri_to_local_path_with(text.trim(), style)?;
            Outcome::new(command.name(), path.to_string_lossy())
        }
        Commands::Replace {
            input,
            needle,
            with,
            max,
            ignore_case,
        } => {
            let text = resolve_input(input.as_deref(), stdin)?;
            let case = if *ignore_case {
                CaseSensitivity::Insensitive
            } else {
                CaseSensitivity::Sensitive
            };
            let (value, count) = replace::replace_with_case(
                &text,
                needle,
                with,
                ReplaceLimit::from(*max),
                case,
                &UnicodeCaseTable,
            );
            Outcome {
                operation: command.name(),
                value,
                count: Some(count),
            }
        }
        Commands::FormatInt { value, radix } => Outcome::new(
            command.name(),
            numeric::format_signed(*value, (*radix).into()),
        ),
        Commands::ParseInt {
            input,
            strict,
            radix,
        } => {
            let text = resolve_input(input.as_deref(), stdin)?;
            let value = match (strict, radix) {
                (_, Some(radix)) => parse::parse_signed(text.trim(), (*radix).into())?,
                (true, None) => i64::from(parse::parse_decimal_int_checked(&text)?),
                (false, None) => parse::parse_int64(&text),
            };
            Outcome::new(command.name(), value.to_string())
        }
        Commands::Tristate { input } => {
            let text = resolve_input(input.as_deref(), stdin)?;
            let state = parse::parse_tristate(text.trim())?;
            let name = match state {
                Tristate::False => "false",
                Tristate::True => "true",
                Tristate::None => "none",
            };
            Outcome::new(command.name(), name)
        }
    };
    Ok(outcome)
}
