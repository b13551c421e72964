//! Cast Vote use case
//!
//! Appends a `vote:<user>` line to a commit's note.

use crate::config::VotingConfig;
use crate::ports::notes_backend::{BackendError, NotesBackend};
use gitvote_domain::{CommitId, DomainError, UserId, Vote, format_vote_line};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while casting a vote
#[derive(Error, Debug)]
pub enum CastVoteError {
    #[error("A user id is required to vote (use --user)")]
    MissingUser,

    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Input for the CastVote use case
#[derive(Debug, Clone)]
pub struct CastVoteInput {
    /// Reference to the commit being voted for
    pub commit: String,
    /// Voter; must be given explicitly
    pub user: Option<String>,
}

impl CastVoteInput {
    pub fn new(commit: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            user: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Result of a successful vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastVoteOutput {
    /// The recorded vote, keyed by the commit reference as given
    pub vote: Vote,
    /// The commit the reference resolved to
    pub resolved: CommitId,
}

/// Use case for casting a vote
///
/// No check is made for an earlier vote by the same user: casting twice
/// writes two lines. The tally counts each voter once per commit.
pub struct CastVoteUseCase<B: NotesBackend + 'static> {
    backend: Arc<B>,
    config: VotingConfig,
}

impl<B: NotesBackend + 'static> CastVoteUseCase<B> {
    pub fn new(backend: Arc<B>, config: VotingConfig) -> Self {
        Self { backend, config }
    }

    pub fn execute(&self, input: CastVoteInput) -> Result<CastVoteOutput, CastVoteError> {
        // Validate everything before touching the backend.
        let user = input.user.ok_or(CastVoteError::MissingUser)?;
        let user = UserId::new(user)?;
        let commit = CommitId::new(input.commit)?;

        let resolved = self.backend.resolve_ref(commit.as_str())?;
        debug!("Resolved {} to {}", commit, resolved);

        let line = format_vote_line(&user);
        self.backend
            .append_note(&self.config.namespace, &commit, &line)?;

        info!(
            "Recorded vote by {} for {} in {}",
            user, resolved, self.config.namespace
        );

        Ok(CastVoteOutput {
            vote: Vote::new(commit, user),
            resolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::notes_backend::InMemoryNotesBackend;

    fn use_case(backend: &Arc<InMemoryNotesBackend>) -> CastVoteUseCase<InMemoryNotesBackend> {
        CastVoteUseCase::new(Arc::clone(backend), VotingConfig::default())
    }

    #[test]
    fn test_cast_vote_appends_line() {
        let backend = Arc::new(InMemoryNotesBackend::new().with_commit("abc123"));
        let output = use_case(&backend)
            .execute(CastVoteInput::new("abc123").with_user("alice"))
            .unwrap();

        assert_eq!(output.vote.user.as_str(), "alice");
        assert_eq!(output.resolved.as_str(), "abc123");
        assert_eq!(
            backend
                .note(&VotingConfig::default().namespace, "abc123")
                .unwrap(),
            "vote:alice\n"
        );
    }

    #[test]
    fn test_cast_vote_resolves_abbreviated_commit() {
        let backend = Arc::new(InMemoryNotesBackend::new().with_commit("abc123def456"));
        let output = use_case(&backend)
            .execute(CastVoteInput::new("abc123").with_user("bob"))
            .unwrap();

        assert_eq!(output.vote.commit.as_str(), "abc123");
        assert_eq!(output.resolved.as_str(), "abc123def456");
    }

    #[test]
    fn test_missing_user_fails_before_backend() {
        let backend = Arc::new(InMemoryNotesBackend::new().with_commit("abc123"));
        let err = use_case(&backend)
            .execute(CastVoteInput::new("abc123"))
            .unwrap_err();

        assert!(matches!(err, CastVoteError::MissingUser));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_invalid_user_fails_before_backend() {
        let backend = Arc::new(InMemoryNotesBackend::new().with_commit("abc123"));
        let err = use_case(&backend)
            .execute(CastVoteInput::new("abc123").with_user("Alice Smith"))
            .unwrap_err();

        assert!(matches!(
            err,
            CastVoteError::InvalidInput(DomainError::InvalidUserId(_))
        ));
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_unknown_commit_propagates_backend_error() {
        let backend = Arc::new(InMemoryNotesBackend::new());
        let err = use_case(&backend)
            .execute(CastVoteInput::new("deadbeef").with_user("alice"))
            .unwrap_err();

        assert!(matches!(err, CastVoteError::Backend(BackendError::NotFound(_))));
    }

    #[test]
    fn test_backend_error_message_is_not_repeated() {
        let backend = Arc::new(InMemoryNotesBackend::new());
        let err = use_case(&backend)
            .execute(CastVoteInput::new("deadbeef").with_user("alice"))
            .unwrap_err();

        // anyhow prints the source chain; the backend message must appear once
        let CastVoteError::Backend(ref inner) = err else {
            panic!("expected a backend error, got {:?}", err);
        };
        assert_eq!(err.to_string(), inner.to_string());
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_duplicate_votes_are_both_written() {
        let backend = Arc::new(InMemoryNotesBackend::new().with_commit("abc123"));
        let uc = use_case(&backend);
        uc.execute(CastVoteInput::new("abc123").with_user("alice"))
            .unwrap();
        uc.execute(CastVoteInput::new("abc123").with_user("alice"))
            .unwrap();

        assert_eq!(
            backend
                .note(&VotingConfig::default().namespace, "abc123")
                .unwrap(),
            "vote:alice\nvote:alice\n"
        );
    }
}
