//! Command-line front end for strkit
//!
//! This library holds the argument definitions and command handlers for the
//! `strkit` binary so they can be tested without spawning a process.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use commands::{Commands, Outcome, run};
pub use config::Config;
pub use error::{CommandError, ConfigError};
pub use output::{OutputFormat, render};
