//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for command results
///
/// This is a domain concept representing how results should be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per item (default)
    #[default]
    Text,
    /// JSON output
    Json,
}
