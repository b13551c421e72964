//! Console output formatter for vote results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use gitvote_domain::{Election, Tally, Vote};

/// Formats results as plain lines for console display
///
/// Line shapes are fixed; color only decorates them:
///
/// ```text
/// <commit>: +1 from <user>
/// <commit>: <N> votes
/// <commit> won the election with <N> votes
/// ```
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Formatter that never emits escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn commit(&self, commit: &str) -> String {
        if self.color {
            commit.yellow().to_string()
        } else {
            commit.to_string()
        }
    }

    fn emphasis(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_votes(&self, votes: &[Vote]) -> String {
        votes
            .iter()
            .map(|v| {
                format!(
                    "{}: +1 from {}\n",
                    self.commit(v.commit.as_str()),
                    self.emphasis(v.user.as_str())
                )
            })
            .collect()
    }

    fn format_tally(&self, tally: &Tally) -> String {
        tally
            .ranked()
            .into_iter()
            .map(|(commit, count)| {
                format!(
                    "{}: {} votes\n",
                    self.commit(commit.as_str()),
                    self.emphasis(&count.to_string())
                )
            })
            .collect()
    }

    fn format_election(&self, election: &Election) -> String {
        let winner = if self.color {
            election.winner.as_str().green().bold().to_string()
        } else {
            election.winner.to_string()
        };
        format!(
            "{} won the election with {} votes\n",
            winner,
            self.emphasis(&election.votes.to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitvote_domain::{CommitId, UserId};

    fn vote(commit: &str, user: &str) -> Vote {
        Vote::new(CommitId::new(commit).unwrap(), UserId::new(user).unwrap())
    }

    #[test]
    fn test_format_votes() {
        let mut votes = vec![vote("c1", "bob"), vote("c1", "alice")];
        Vote::sort(&mut votes);

        let output = ConsoleFormatter::plain().format_votes(&votes);
        assert_eq!(output, "c1: +1 from alice\nc1: +1 from bob\n");
    }

    #[test]
    fn test_format_votes_empty() {
        assert_eq!(ConsoleFormatter::plain().format_votes(&[]), "");
    }

    #[test]
    fn test_format_tally_ascending() {
        let tally = Tally::from_votes([
            vote("c2", "a"),
            vote("c2", "b"),
            vote("c1", "a"),
            vote("c1", "a"),
        ]);

        let output = ConsoleFormatter::plain().format_tally(&tally);
        assert_eq!(output, "c1: 1 votes\nc2: 2 votes\n");
    }

    #[test]
    fn test_format_election() {
        let election = Election {
            winner: CommitId::new("c2").unwrap(),
            votes: 3,
        };
        assert_eq!(
            ConsoleFormatter::plain().format_election(&election),
            "c2 won the election with 3 votes\n"
        );
    }

    #[test]
    fn test_color_keeps_text() {
        let output = ConsoleFormatter::new(true).format_votes(&[vote("c1", "alice")]);
        assert!(output.contains("c1"));
        assert!(output.contains("+1 from"));
        assert!(output.contains("alice"));
    }
}
