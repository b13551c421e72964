//! Domain layer for git-vote
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Voting
//!
//! Votes for commits are stored as `vote:<user>` lines in git notes:
//!
//! - **Vote**: one user backing one commit
//! - **Tally**: unique voters per commit
//! - **Election**: the single winning commit of a tally

pub mod config;
pub mod core;
pub mod voting;

// Re-export commonly used types
pub use config::{NotesNamespace, OutputFormat};
pub use core::error::DomainError;
pub use voting::{
    CommitId, Election, ParsedLine, Tally, UserId, Vote, format_vote_line, parse_note,
    parse_vote_line,
};
