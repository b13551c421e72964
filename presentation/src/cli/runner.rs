//! Command dispatch
//!
//! Runs a parsed subcommand against a notes backend and renders the result.

use super::commands::Command;
use crate::output::formatter::OutputFormatter;
use gitvote_application::{
    CastVoteError, CastVoteInput, CastVoteUseCase, ElectError, ElectUseCase, NotesBackend,
    ReadVotesError, ReadVotesUseCase, TallyVotesUseCase, VotingConfig,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by any subcommand
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Vote(#[from] CastVoteError),

    #[error(transparent)]
    Read(#[from] ReadVotesError),

    #[error(transparent)]
    Elect(#[from] ElectError),
}

/// Executes subcommands against one backend
pub struct CommandRunner<B: NotesBackend + 'static> {
    backend: Arc<B>,
    config: VotingConfig,
}

impl<B: NotesBackend + 'static> CommandRunner<B> {
    pub fn new(backend: Arc<B>, config: VotingConfig) -> Self {
        Self { backend, config }
    }

    /// Run `command`, returning the text to print on stdout
    pub fn run(
        &self,
        command: Command,
        formatter: &dyn OutputFormatter,
    ) -> Result<String, CommandError> {
        let backend = Arc::clone(&self.backend);
        let config = self.config.clone();

        match command {
            Command::Vote { user, commit } => {
                let mut input = CastVoteInput::new(commit);
                input.user = user;
                CastVoteUseCase::new(backend, config).execute(input)?;
                Ok(String::new())
            }
            Command::List => {
                let votes = ReadVotesUseCase::new(backend, config).execute_sorted()?;
                Ok(formatter.format_votes(&votes))
            }
            Command::Tally => {
                let tally = TallyVotesUseCase::new(backend, config).execute()?;
                Ok(formatter.format_tally(&tally))
            }
            Command::Elect => {
                let election = ElectUseCase::new(backend, config).execute()?;
                Ok(formatter.format_election(&election))
            }
        }
    }
}
