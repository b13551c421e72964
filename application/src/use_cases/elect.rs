//! Elect use case
//!
//! Tallies every vote and picks the winning commit.

use super::read_votes::ReadVotesError;
use super::tally_votes::TallyVotesUseCase;
use crate::config::VotingConfig;
use crate::ports::notes_backend::NotesBackend;
use gitvote_domain::{DomainError, Election};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during an election
#[derive(Error, Debug)]
pub enum ElectError {
    #[error(transparent)]
    Read(#[from] ReadVotesError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ElectError {
    /// Whether the election failed only because nobody has voted yet
    pub fn is_no_votes(&self) -> bool {
        matches!(self, ElectError::Domain(e) if e.is_no_votes())
    }
}

/// Use case for electing a commit
pub struct ElectUseCase<B: NotesBackend + 'static> {
    tally: TallyVotesUseCase<B>,
}

impl<B: NotesBackend + 'static> ElectUseCase<B> {
    pub fn new(backend: Arc<B>, config: VotingConfig) -> Self {
        Self {
            tally: TallyVotesUseCase::new(backend, config),
        }
    }

    pub fn execute(&self) -> Result<Election, ElectError> {
        let tally = self.tally.execute()?;
        debug!("Electing among {} commits", tally.len());
        Ok(Election::from_tally(&tally)?)
    }
}
