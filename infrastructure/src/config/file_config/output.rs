//! `[output]` section: how list, tally and elect results are rendered

use gitvote_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Rendering settings read from TOML
///
/// `format` stays `None` unless a file sets it, so `--format` and the
/// built-in text default can still tell "unset" apart from "text".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    /// Styling of text output; JSON is never colored
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
