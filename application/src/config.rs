//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as which notes namespace holds the votes.

use gitvote_domain::NotesNamespace;

/// Voting configuration shared by all use cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VotingConfig {
    /// Notes ref that votes are written to and read from.
    pub namespace: NotesNamespace,
}

impl VotingConfig {
    /// Creates a VotingConfig storing votes under `namespace`.
    pub fn with_namespace(namespace: NotesNamespace) -> Self {
        Self { namespace }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_namespace() {
        assert_eq!(
            VotingConfig::default().namespace.as_str(),
            "refs/notes/votes"
        );
    }
}
