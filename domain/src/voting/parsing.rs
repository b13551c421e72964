//! Vote line parsing.
//!
//! Notes hold free-form text. A line is a vote only when, once trimmed, it is
//! exactly `vote:<user>` with `<user>` matching the user id pattern. Anything
//! else is left alone: the note may carry unrelated text.
//!
//! These functions are pure domain logic with no I/O and no logging. Reporting
//! skipped lines is up to the caller.

use super::value_objects::{CommitId, UserId};
use super::vote::Vote;
use regex::Regex;
use std::sync::LazyLock;

/// Prefix marking a vote line inside a note
pub const VOTE_PREFIX: &str = "vote:";

static VOTE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^vote:(?P<user>[a-z0-9@._]+)$").expect("vote line pattern is a valid regex")
});

/// Outcome of parsing one line of a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// The line is a well-formed vote
    Vote(Vote),
    /// Empty line
    Blank,
    /// Anything else; carries the raw line for diagnostics
    Skipped(String),
}

impl ParsedLine {
    pub fn into_vote(self) -> Option<Vote> {
        match self {
            ParsedLine::Vote(vote) => Some(vote),
            _ => None,
        }
    }
}

/// Parse a single note line attached to `commit`.
///
/// # Examples
///
/// ```
/// use gitvote_domain::voting::{parse_vote_line, CommitId, ParsedLine};
///
/// let commit = CommitId::new("abc123").unwrap();
/// assert!(matches!(parse_vote_line(&commit, "  vote:alice  "), ParsedLine::Vote(_)));
/// assert_eq!(parse_vote_line(&commit, ""), ParsedLine::Blank);
/// assert!(matches!(parse_vote_line(&commit, "vote:Alice"), ParsedLine::Skipped(_)));
/// ```
pub fn parse_vote_line(commit: &CommitId, line: &str) -> ParsedLine {
    if line.is_empty() {
        return ParsedLine::Blank;
    }
    let trimmed = line.trim();

    let Some(caps) = VOTE_LINE_RE.captures(trimmed) else {
        return ParsedLine::Skipped(line.to_string());
    };

    match UserId::new(&caps["user"]) {
        Ok(user) => ParsedLine::Vote(Vote::new(commit.clone(), user)),
        Err(_) => ParsedLine::Skipped(line.to_string()),
    }
}

/// Parse every line of a note, in order.
pub fn parse_note<'a>(
    commit: &'a CommitId,
    content: &'a str,
) -> impl Iterator<Item = ParsedLine> + 'a {
    content.lines().map(move |line| parse_vote_line(commit, line))
}

/// Render the note line recording a vote by `user`.
pub fn format_vote_line(user: &UserId) -> String {
    format!("{}{}", VOTE_PREFIX, user)
}
