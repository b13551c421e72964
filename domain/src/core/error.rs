//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No votes have been cast")]
    NoVotes,

    #[error("Invalid user id '{0}': expected lowercase letters, digits, '@', '.' or '_'")]
    InvalidUserId(String),

    #[error("Invalid commit reference: {0}")]
    InvalidCommit(String),

    #[error("Invalid notes namespace: {0}")]
    InvalidNamespace(String),
}

impl DomainError {
    /// Check if this error means the election had nothing to count
    pub fn is_no_votes(&self) -> bool {
        matches!(self, DomainError::NoVotes)
    }
}
