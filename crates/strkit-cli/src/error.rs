//! Error types for the command-line front end

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Argument value is not usable for the selected command
    #[error("Invalid value for --{argument}: {reason}")]
    InvalidArgument {
        /// Long name of the argument
        argument: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors raised while running a command
#[derive(Debug, Error)]
pub enum CommandError {
    /// Reading the input from stdin failed
    #[error("Failed to read input from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    /// Decoded bytes cannot be shown as text
    #[error("Decoded {0} bytes are not valid UTF-8")]
    NotText(usize),

    /// Library operation rejected the input
    #[error(transparent)]
    Parse(#[from] strkit::ParseError),
}
