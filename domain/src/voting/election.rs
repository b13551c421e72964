//! Election of a winning commit from a tally

use super::tally::Tally;
use super::value_objects::CommitId;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The commit that won an election
///
/// The winner is the commit with the most unique voters. Ties are broken by
/// the greatest commit id in plain string order: candidates are compared as
/// `(count, commit)` pairs and the maximum wins. This tie-break is part of the
/// contract, so the same tally always elects the same commit.
///
/// # Example
///
/// ```
/// use gitvote_domain::voting::{CommitId, Election, Tally, UserId, Vote};
///
/// let v = |c: &str, u: &str| Vote::new(CommitId::new(c).unwrap(), UserId::new(u).unwrap());
/// let tally = Tally::from_votes([v("c1", "a"), v("c1", "b"), v("c2", "x"), v("c2", "y")]);
///
/// let election = Election::from_tally(&tally).unwrap();
/// assert_eq!(election.winner.as_str(), "c2"); // tie at 2, "c2" > "c1"
/// assert_eq!(election.votes, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    /// Winning commit
    pub winner: CommitId,
    /// Unique voters for the winner
    pub votes: usize,
}

impl Election {
    /// Elect a winner, failing with [`DomainError::NoVotes`] on an empty tally
    pub fn from_tally(tally: &Tally) -> Result<Self, DomainError> {
        tally
            .iter()
            .map(|(commit, users)| (users.len(), commit))
            .max()
            .map(|(votes, commit)| Self {
                winner: commit.clone(),
                votes,
            })
            .ok_or(DomainError::NoVotes)
    }
}

impl std::fmt::Display for Election {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} won the election with {} votes",
            self.winner, self.votes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voting::{UserId, Vote};

    fn tally(entries: &[(&str, &[&str])]) -> Tally {
        entries
            .iter()
            .flat_map(|(commit, users)| {
                users.iter().map(move |user| {
                    Vote::new(CommitId::new(*commit).unwrap(), UserId::new(*user).unwrap())
                })
            })
            .collect()
    }

    #[test]
    fn test_most_voters_wins() {
        let t = tally(&[("c1", &["a", "b"]), ("c2", &["a", "b", "c"])]);
        let election = Election::from_tally(&t).unwrap();

        assert_eq!(election.winner.as_str(), "c2");
        assert_eq!(election.votes, 3);
    }

    #[test]
    fn test_tie_goes_to_greatest_commit_id() {
        let t = tally(&[("c1", &["a", "b"]), ("c2", &["x", "y"])]);
        let election = Election::from_tally(&t).unwrap();

        assert_eq!(election.winner.as_str(), "c2");
        assert_eq!(election.votes, 2);

        // Insertion order does not matter.
        let t = tally(&[("c2", &["x", "y"]), ("c1", &["a", "b"])]);
        assert_eq!(Election::from_tally(&t).unwrap().winner.as_str(), "c2");
    }

    #[test]
    fn test_count_beats_commit_order() {
        let t = tally(&[("zzz", &["a"]), ("aaa", &["a", "b"])]);
        let election = Election::from_tally(&t).unwrap();
        assert_eq!(election.winner.as_str(), "aaa");
    }

    #[test]
    fn test_empty_tally_is_an_error() {
        let result = Election::from_tally(&Tally::new());
        assert_eq!(result, Err(DomainError::NoVotes));
    }

    #[test]
    fn test_display() {
        let election = Election {
            winner: CommitId::new("abc123").unwrap(),
            votes: 4,
        };
        assert_eq!(
            election.to_string(),
            "abc123 won the election with 4 votes"
        );
    }
}
