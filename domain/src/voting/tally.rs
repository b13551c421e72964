//! Tally of unique voters per commit

use super::value_objects::{CommitId, UserId};
use super::vote::Vote;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Unique voters per commit
///
/// Built fresh from the full vote history and never persisted. Voters are
/// kept in a set, so the same `(commit, user)` pair counts once however many
/// times it was cast, and the result does not depend on input order.
///
/// # Example
///
/// ```
/// use gitvote_domain::voting::{CommitId, Tally, UserId, Vote};
///
/// let v = |c: &str, u: &str| Vote::new(CommitId::new(c).unwrap(), UserId::new(u).unwrap());
/// let tally = Tally::from_votes([v("c1", "alice"), v("c1", "alice"), v("c2", "bob")]);
///
/// assert_eq!(tally.count(&CommitId::new("c1").unwrap()), 1);
/// assert_eq!(tally.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    voters: BTreeMap<CommitId, BTreeSet<UserId>>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate a vote sequence
    pub fn from_votes(votes: impl IntoIterator<Item = Vote>) -> Self {
        let mut tally = Self::new();
        for vote in votes {
            tally.add(vote);
        }
        tally
    }

    /// Record one vote
    pub fn add(&mut self, vote: Vote) {
        self.voters.entry(vote.commit).or_default().insert(vote.user);
    }

    /// Number of commits with at least one vote
    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Voters for a commit, if it received any votes
    pub fn voters(&self, commit: &CommitId) -> Option<&BTreeSet<UserId>> {
        self.voters.get(commit)
    }

    /// Number of unique voters for a commit (0 if never voted for)
    pub fn count(&self, commit: &CommitId) -> usize {
        self.voters.get(commit).map_or(0, BTreeSet::len)
    }

    /// Iterate `(commit, voters)` in commit order
    pub fn iter(&self) -> impl Iterator<Item = (&CommitId, &BTreeSet<UserId>)> {
        self.voters.iter()
    }

    /// `(commit, count)` pairs ranked ascending by `(count, commit)`,
    /// least-voted first
    pub fn ranked(&self) -> Vec<(&CommitId, usize)> {
        let mut ranked: Vec<_> = self
            .voters
            .iter()
            .map(|(commit, users)| (commit, users.len()))
            .collect();
        ranked.sort_by(|a, b| (a.1, a.0).cmp(&(b.1, b.0)));
        ranked
    }
}

impl FromIterator<Vote> for Tally {
    fn from_iter<I: IntoIterator<Item = Vote>>(iter: I) -> Self {
        Self::from_votes(iter)
    }
}
