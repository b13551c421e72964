//! Notes configuration from TOML (`[notes]` section)

use gitvote_domain::{DomainError, NotesNamespace};
use serde::{Deserialize, Serialize};

/// Raw notes configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotesConfig {
    /// Notes ref holding the votes; short names expand to `refs/notes/<name>`
    pub namespace: String,
}

impl Default for FileNotesConfig {
    fn default() -> Self {
        Self {
            namespace: NotesNamespace::DEFAULT.to_string(),
        }
    }
}

impl FileNotesConfig {
    pub fn parse_namespace(&self) -> Result<NotesNamespace, DomainError> {
        NotesNamespace::new(&self.namespace)
    }
}
