//! Command-line and environment configuration
//!
//! Global options can be given as flags or through environment variables:
//!
//! - `--log-level` / `STRKIT_LOG_LEVEL`
//! - `--format` / `STRKIT_FORMAT`
//! - `--path-style` / `STRKIT_PATH_STYLE` (default for `uri-to-path`)
//!
//! `RUST_LOG`, when set, overrides `--log-level`.

use crate::commands::Commands;
use crate::error::ConfigError;
use crate::output::OutputFormat;
use clap::{Parser, ValueEnum};
use tracing::Level;

/// Top-level CLI configuration
#[derive(Debug, Clone, Parser)]
#[command(
    name = "strkit",
    about = "Encode, decode, parse and convert strings from the command line",
    version
)]
pub struct Config {
    /// Logging level for diagnostics written to stderr
    #[arg(
        long,
        env = "STRKIT_LOG_LEVEL",
        value_enum,
        default_value = "warn",
        global = true
    )]
    pub log_level: LogLevel,

    /// Output format
    #[arg(
        short = 'o',
        long,
        env = "STRKIT_FORMAT",
        value_enum,
        default_value = "text",
        global = true
    )]
    pub format: OutputFormat,

    /// Path syntax used by `uri-to-path` when `--style` is not given
    #[arg(
        long,
        env = "STRKIT_PATH_STYLE",
        value_enum,
        default_value = "windows",
        global = true
    )]
    pub path_style: StyleArg,

    #[command(subcommand)]
    pub command: Commands,
}

impl Config {
    /// Parse configuration from command-line arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `replace` is given an empty `--needle`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Commands::Replace { needle, .. } = &self.command
            && needle.is_empty()
        {
            return Err(ConfigError::InvalidArgument {
                argument: "needle",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Log verbosity
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything, including per-escape decisions
    Trace,
    /// Fallbacks and conversions
    Debug,
    /// Informational messages
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Path syntax argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleArg {
    /// `c:\dir\file`
    Windows,
    /// `/dir/file`
    Posix,
}

impl From<StyleArg> for strkit::PathStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Windows => Self::Windows,
            StyleArg::Posix => Self::Posix,
        }
    }
}

/// Radix argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadixArg {
    /// Base 2
    #[value(alias = "2")]
    Binary,
    /// Base 8
    #[value(alias = "8")]
    Octal,
    /// Base 10
    #[value(alias = "10")]
    Decimal,
    /// Base 16
    #[value(alias = "16")]
    Hex,
}

impl From<RadixArg> for strkit::Radix {
    fn from(radix: RadixArg) -> Self {
        match radix {
            RadixArg::Binary => Self::Binary,
            RadixArg::Octal => Self::Octal,
            RadixArg::Decimal => Self::Decimal,
            RadixArg::Hex => Self::Hex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = Config::try_parse_from(["strkit", "escape", "a b"]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.path_style, StyleArg::Windows);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config =
            Config::try_parse_from(["strkit", "unescape", "%20", "--format", "json"]).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_needle_rejected() {
        let config =
            Config::try_parse_from(["strkit", "replace", "abc", "--needle", "", "--with", "x"])
                .unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for --needle: must not be empty");
    }

    #[test]
    fn test_radix_aliases() {
        assert_eq!(RadixArg::from_str("16", true), Ok(RadixArg::Hex));
        assert_eq!(strkit::Radix::from(RadixArg::Octal), strkit::Radix::Octal);
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
    }
}
