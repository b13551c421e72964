//! Output formatter trait

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;
use crate::config::OutputConfig;
use gitvote_domain::{Election, OutputFormat, Tally, Vote};

/// Trait for formatting command results
///
/// Each method returns the complete output, one line per reported item
/// for text formats.
pub trait OutputFormatter {
    /// Format votes for `list`; callers pass them already sorted
    fn format_votes(&self, votes: &[Vote]) -> String;

    /// Format a tally for `tally`, least-voted commit first
    fn format_tally(&self, tally: &Tally) -> String;

    /// Format the winner for `elect`
    fn format_election(&self, election: &Election) -> String;
}

/// Pick the formatter for the configured output format
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(ConsoleFormatter::new(config.color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
