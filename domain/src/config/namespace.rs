//! Notes namespace value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NOTES_PREFIX: &str = "refs/notes/";

/// The notes ref that stores votes
///
/// Short names expand the way `git notes --ref` expands them: `votes`
/// becomes `refs/notes/votes`, `notes/votes` becomes `refs/notes/votes`,
/// and anything already under `refs/` is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NotesNamespace(String);

impl NotesNamespace {
    /// The namespace votes are stored in unless configured otherwise
    pub const DEFAULT: &'static str = "refs/notes/votes";

    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        if name.is_empty() || name.ends_with('/') || name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidNamespace(name.to_string()));
        }

        let full = if name.starts_with("refs/") {
            name.to_string()
        } else if let Some(rest) = name.strip_prefix("notes/") {
            format!("{}{}", NOTES_PREFIX, rest)
        } else {
            format!("{}{}", NOTES_PREFIX, name)
        };
        Ok(Self(full))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NotesNamespace {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for NotesNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NotesNamespace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NotesNamespace {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NotesNamespace> for String {
    fn from(value: NotesNamespace) -> Self {
        value.0
    }
}
