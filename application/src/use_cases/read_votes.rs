//! Read Votes use case
//!
//! Walks every note in the voting namespace and yields the votes they hold.

use crate::config::VotingConfig;
use crate::ports::notes_backend::{BackendError, NoteEntry, NotesBackend};
use gitvote_domain::{ParsedLine, Vote, parse_note};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while reading votes
#[derive(Error, Debug)]
pub enum ReadVotesError {
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Use case for reading all votes
///
/// Each call to [`execute`](Self::execute) lists the namespace afresh;
/// nothing is cached between calls.
pub struct ReadVotesUseCase<B: NotesBackend + 'static> {
    backend: Arc<B>,
    config: VotingConfig,
}

impl<B: NotesBackend + 'static> ReadVotesUseCase<B> {
    pub fn new(backend: Arc<B>, config: VotingConfig) -> Self {
        Self { backend, config }
    }

    /// List the namespace and return a lazy stream over its votes
    ///
    /// Listing failures are returned here. Failures fetching an individual
    /// note surface as `Err` items from the stream.
    pub fn execute(&self) -> Result<VoteStream<B>, ReadVotesError> {
        let entries = self.backend.list_notes(&self.config.namespace)?;
        debug!(
            "Found {} notes in {}",
            entries.len(),
            self.config.namespace
        );
        Ok(VoteStream::new(Arc::clone(&self.backend), entries))
    }

    /// Read every vote, sorted by `(commit, user)`
    pub fn execute_sorted(&self) -> Result<Vec<Vote>, ReadVotesError> {
        let mut votes = self.execute()?.collect::<Result<Vec<_>, _>>()?;
        Vote::sort(&mut votes);
        Ok(votes)
    }
}

/// Lazy sequence of votes
///
/// Notes are fetched one at a time, as the iterator advances. Malformed
/// lines are logged and skipped; they never end the stream.
pub struct VoteStream<B: NotesBackend> {
    backend: Arc<B>,
    entries: std::vec::IntoIter<NoteEntry>,
    pending: std::vec::IntoIter<Vote>,
}

impl<B: NotesBackend> VoteStream<B> {
    fn new(backend: Arc<B>, entries: Vec<NoteEntry>) -> Self {
        Self {
            backend,
            entries: entries.into_iter(),
            pending: Vec::new().into_iter(),
        }
    }

    fn load(&self, entry: &NoteEntry) -> Result<Vec<Vote>, ReadVotesError> {
        debug!("Reading note {} for {}", entry.note_ref, entry.commit);
        let content = self.backend.show_object(&entry.note_ref)?;

        let votes = parse_note(&entry.commit, &content)
            .filter_map(|parsed| match parsed {
                ParsedLine::Vote(vote) => Some(vote),
                ParsedLine::Blank => None,
                ParsedLine::Skipped(line) => {
                    warn!("Skipping malformed vote line on {}: {:?}", entry.commit, line);
                    None
                }
            })
            .collect();
        Ok(votes)
    }
}

impl<B: NotesBackend> Iterator for VoteStream<B> {
    type Item = Result<Vote, ReadVotesError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(vote) = self.pending.next() {
                return Some(Ok(vote));
            }
            let entry = self.entries.next()?;
            match self.load(&entry) {
                Ok(votes) => self.pending = votes.into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
