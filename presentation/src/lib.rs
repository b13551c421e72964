//! Presentation layer for git-vote
//!
//! This crate contains CLI definitions, command dispatch and output
//! formatters.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormatArg};
pub use cli::runner::{CommandError, CommandRunner};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
