//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod cast_vote;
pub mod elect;
pub mod read_votes;
pub mod tally_votes;
