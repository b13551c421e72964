//! Application layer for git-vote
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::VotingConfig;
pub use ports::notes_backend::{BackendError, InMemoryNotesBackend, NoteEntry, NotesBackend};
pub use use_cases::cast_vote::{CastVoteError, CastVoteInput, CastVoteOutput, CastVoteUseCase};
pub use use_cases::elect::{ElectError, ElectUseCase};
pub use use_cases::read_votes::{ReadVotesError, ReadVotesUseCase, VoteStream};
pub use use_cases::tally_votes::TallyVotesUseCase;
