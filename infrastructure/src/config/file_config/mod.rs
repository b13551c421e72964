//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod notes;
mod output;

pub use notes::FileNotesConfig;
pub use output::FileOutputConfig;

use gitvote_application::VotingConfig;
use gitvote_domain::DomainError;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where votes are stored
    pub notes: FileNotesConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Build the use-case configuration, validating the namespace
    pub fn voting_config(&self) -> Result<VotingConfig, DomainError> {
        Ok(VotingConfig::with_namespace(self.notes.parse_namespace()?))
    }
}
