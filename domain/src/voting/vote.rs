//! Vote types
//!
//! This module defines the single voting primitive: a user backing a commit.

use super::value_objects::{CommitId, UserId};
use serde::{Deserialize, Serialize};

/// A single vote for a commit
///
/// A vote carries no identity beyond its `(commit, user)` pair. Casting the
/// same pair twice produces two equal votes; the tally collapses them.
///
/// # Example
///
/// ```
/// use gitvote_domain::voting::{CommitId, UserId, Vote};
///
/// let vote = Vote::new(
///     CommitId::new("abc123").unwrap(),
///     UserId::new("alice").unwrap(),
/// );
/// assert_eq!(vote.to_string(), "abc123: +1 from alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vote {
    /// The commit being voted for
    pub commit: CommitId,
    /// The voter
    pub user: UserId,
}

impl Vote {
    pub fn new(commit: CommitId, user: UserId) -> Self {
        Self { commit, user }
    }

    /// Sort votes by `(commit, user)`, the order `list` reports them in
    pub fn sort(votes: &mut [Vote]) {
        // Field order makes the derived Ord exactly (commit, user).
        votes.sort();
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: +1 from {}", self.commit, self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(commit: &str, user: &str) -> Vote {
        Vote::new(CommitId::new(commit).unwrap(), UserId::new(user).unwrap())
    }

    #[test]
    fn test_vote_display() {
        assert_eq!(vote("c1", "bob").to_string(), "c1: +1 from bob");
    }

    #[test]
    fn test_sort_by_commit_then_user() {
        let mut votes = vec![
            vote("c2", "alice"),
            vote("c1", "bob"),
            vote("c1", "alice"),
        ];
        Vote::sort(&mut votes);

        assert_eq!(
            votes,
            vec![vote("c1", "alice"), vote("c1", "bob"), vote("c2", "alice")]
        );
    }

    #[test]
    fn test_identical_pairs_are_equal() {
        assert_eq!(vote("c1", "alice"), vote("c1", "alice"));
    }
}
