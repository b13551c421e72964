//! Identifiers used by votes.

use crate::core::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Characters a user id may contain, anchored at both ends.
pub(crate) const USER_ID_PATTERN: &str = r"^[a-z0-9@._]+$";

static USER_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(USER_ID_PATTERN).expect("user id pattern is a valid regex")
});

/// Identifies a commit in the repository's object graph.
///
/// Opaque: a full or abbreviated hash, or any ref the backend can resolve.
/// Ordering is plain string ordering, which the election relies on for
/// tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Create a commit id, rejecting empty or whitespace-bearing references
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidCommit(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CommitId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifies a voter.
///
/// Only lowercase ASCII letters, digits, `@`, `.` and `_` are allowed, so an
/// email-like `alice@example.com` is valid while `Alice` is not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if USER_ID_RE.is_match(&id) {
            Ok(Self(id))
        } else {
            Err(DomainError::InvalidUserId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_accepts_allowed_characters() {
        for id in ["alice", "bob42", "alice@example.com", "first.last", "a_b", "0"] {
            assert!(UserId::new(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_user_id_rejects_everything_else() {
        for id in ["", "Alice", "bob smith", "carol-x", "dave+1", "émile", "x\n"] {
            assert_eq!(
                UserId::new(id),
                Err(DomainError::InvalidUserId(id.to_string())),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_user_id_deserialize_validates() {
        let ok: UserId = serde_json::from_str("\"alice\"").unwrap();
        assert_eq!(ok.as_str(), "alice");
        assert!(serde_json::from_str::<UserId>("\"ALICE\"").is_err());
    }

    #[test]
    fn test_commit_id_rejects_blank() {
        assert!(CommitId::new("").is_err());
        assert!(CommitId::new("abc 123").is_err());
        assert_eq!(CommitId::new("HEAD~1").unwrap().as_str(), "HEAD~1");
    }

    #[test]
    fn test_commit_id_string_ordering() {
        let c1: CommitId = "c1".parse().unwrap();
        let c2: CommitId = "c2".parse().unwrap();
        assert!(c1 < c2);
        assert_eq!(c2.to_string(), "c2");
    }
}
