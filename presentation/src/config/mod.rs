//! Presentation-level configuration
//!
//! Resolved output settings, after merging command-line flags over the
//! configuration file.

use gitvote_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// How results are rendered
    pub format: OutputFormat,
    /// Enable colored terminal output (text format only)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Merge flags over file settings: an explicit `--format` wins, and
    /// `--no-color` can only turn color off.
    pub fn resolve(
        flag_format: Option<OutputFormat>,
        no_color: bool,
        file_format: Option<OutputFormat>,
        file_color: bool,
    ) -> Self {
        Self {
            format: flag_format.or(file_format).unwrap_or_default(),
            color: file_color && !no_color,
        }
    }
}
