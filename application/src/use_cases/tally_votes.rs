//! Tally Votes use case

use super::read_votes::{ReadVotesError, ReadVotesUseCase};
use crate::config::VotingConfig;
use crate::ports::notes_backend::NotesBackend;
use gitvote_domain::Tally;
use std::sync::Arc;

/// Use case for counting unique voters per commit
pub struct TallyVotesUseCase<B: NotesBackend + 'static> {
    reader: ReadVotesUseCase<B>,
}

impl<B: NotesBackend + 'static> TallyVotesUseCase<B> {
    pub fn new(backend: Arc<B>, config: VotingConfig) -> Self {
        Self {
            reader: ReadVotesUseCase::new(backend, config),
        }
    }

    pub fn execute(&self) -> Result<Tally, ReadVotesError> {
        let mut tally = Tally::new();
        for vote in self.reader.execute()? {
            tally.add(vote?);
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::notes_backend::InMemoryNotesBackend;
    use crate::use_cases::cast_vote::{CastVoteInput, CastVoteUseCase};
    use gitvote_domain::{CommitId, NotesNamespace};

    #[test]
    fn test_tally_from_notes() {
        let ns = NotesNamespace::default();
        let backend = Arc::new(
            InMemoryNotesBackend::new()
                .with_note(&ns, "c1", "vote:alice\nvote:bob\nvote:alice\n")
                .with_note(&ns, "c2", "vote:carol\n"),
        );

        let tally = TallyVotesUseCase::new(backend, VotingConfig::default())
            .execute()
            .unwrap();

        assert_eq!(tally.count(&CommitId::new("c1").unwrap()), 2);
        assert_eq!(tally.count(&CommitId::new("c2").unwrap()), 1);
    }

    #[test]
    fn test_same_user_twice_counts_once() {
        let backend = Arc::new(InMemoryNotesBackend::new().with_commit("abc123"));
        let caster = CastVoteUseCase::new(Arc::clone(&backend), VotingConfig::default());
        for _ in 0..2 {
            caster
                .execute(CastVoteInput::new("abc123").with_user("alice"))
                .unwrap();
        }

        let tally = TallyVotesUseCase::new(backend, VotingConfig::default())
            .execute()
            .unwrap();
        assert_eq!(tally.count(&CommitId::new("abc123").unwrap()), 1);
    }
}
