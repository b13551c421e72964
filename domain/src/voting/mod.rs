//! Commit voting domain
//!
//! This module contains the core concepts for voting on commits.
//!
//! # Core Concepts
//!
//! ## Vote
//! A `(commit, user)` pair. Votes live as `vote:<user>` lines in a note
//! attached to the commit.
//!
//! ## Tally
//! Unique voters per commit, rebuilt from every vote on each query.
//!
//! ## Election
//! Deterministic choice of one winning commit from a tally.
//!
//! # Flow
//!
//! ```text
//! note text ──parse_note──▶ Vote* ──Tally::from_votes──▶ Tally ──Election::from_tally──▶ Election
//! ```

pub mod election;
pub mod parsing;
pub mod tally;
pub mod value_objects;
pub mod vote;

// Re-export main types
pub use election::Election;
pub use parsing::{ParsedLine, VOTE_PREFIX, format_vote_line, parse_note, parse_vote_line};
pub use tally::Tally;
pub use value_objects::{CommitId, UserId};
pub use vote::Vote;
