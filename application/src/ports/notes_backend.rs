//! Notes backend port
//!
//! Defines the interface to the version-control store that holds votes.
//! Votes live in notes attached to commits under one namespace; this port
//! exposes the four primitives the use cases need and nothing else.
//!
//! # Implementations
//!
//! - `GitNotesBackend` in the infrastructure layer runs the `git` binary
//! - [`InMemoryNotesBackend`] keeps notes in memory, for tests and dry runs

use gitvote_domain::{CommitId, NotesNamespace};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Errors reported by a notes backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Failed to run {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Unexpected notes listing line: {0:?}")]
    MalformedListing(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid output from backend: {0}")]
    InvalidOutput(String),
}

/// One note in a namespace: the note object and the commit it annotates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    /// Object name of the note content, as accepted by [`NotesBackend::show_object`]
    pub note_ref: String,
    /// The annotated commit
    pub commit: CommitId,
}

/// Port to the repository's note store
///
/// All calls block. Implementations must not cache between calls: every
/// read reflects the store at the time of the call.
pub trait NotesBackend: Send + Sync {
    /// Append `text` as a new line of the commit's note in `namespace`,
    /// creating the note if the commit has none yet.
    fn append_note(
        &self,
        namespace: &NotesNamespace,
        commit: &CommitId,
        text: &str,
    ) -> Result<(), BackendError>;

    /// Enumerate every note in `namespace`
    fn list_notes(&self, namespace: &NotesNamespace) -> Result<Vec<NoteEntry>, BackendError>;

    /// Raw content of the object named by `object`
    fn show_object(&self, object: &str) -> Result<String, BackendError>;

    /// Resolve any commit reference (abbreviated hash, branch, `HEAD~2`, ...)
    fn resolve_ref(&self, reference: &str) -> Result<CommitId, BackendError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    commits: Vec<CommitId>,
    // (namespace, commit) -> note content
    notes: BTreeMap<(String, CommitId), String>,
    // listed notes whose content can no longer be read
    dangling: Vec<(String, CommitId)>,
}

/// In-memory notes store
///
/// Commits must be registered with [`with_commit`](Self::with_commit) before
/// they can be resolved or annotated, mirroring a repository where unknown
/// objects are an error. References resolve by unique prefix.
#[derive(Debug, Default)]
pub struct InMemoryNotesBackend {
    state: Mutex<MemoryState>,
    calls: AtomicUsize,
}

impl InMemoryNotesBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a commit
    pub fn with_commit(self, id: &str) -> Self {
        if let Ok(commit) = CommitId::new(id) {
            self.lock().commits.push(commit);
        }
        self
    }

    /// Seed a commit's note with raw content
    pub fn with_note(self, namespace: &NotesNamespace, commit: &str, content: &str) -> Self {
        if let Ok(commit) = CommitId::new(commit) {
            let mut state = self.lock();
            if !state.commits.contains(&commit) {
                state.commits.push(commit.clone());
            }
            state
                .notes
                .insert((namespace.to_string(), commit), content.to_string());
        }
        self
    }

    /// Seed a note that is listed but whose content is missing
    pub fn with_dangling_note(self, namespace: &NotesNamespace, commit: &str) -> Self {
        if let Ok(commit) = CommitId::new(commit) {
            self.lock().dangling.push((namespace.to_string(), commit));
        }
        self
    }

    /// Current content of a commit's note, if any
    pub fn note(&self, namespace: &NotesNamespace, commit: &str) -> Option<String> {
        let commit = CommitId::new(commit).ok()?;
        self.lock()
            .notes
            .get(&(namespace.to_string(), commit))
            .cloned()
    }

    /// Number of backend primitives invoked so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn note_ref(namespace: &str, commit: &CommitId) -> String {
        format!("{}:{}", namespace, commit)
    }

    fn resolve_locked(state: &MemoryState, reference: &str) -> Result<CommitId, BackendError> {
        let mut matches = state
            .commits
            .iter()
            .filter(|c| c.as_str().starts_with(reference));
        match (matches.next(), matches.next()) {
            (Some(commit), None) if !reference.is_empty() => Ok(commit.clone()),
            (Some(_), Some(_)) => Err(BackendError::NotFound(format!(
                "ambiguous reference '{}'",
                reference
            ))),
            _ => Err(BackendError::NotFound(format!(
                "unknown revision '{}'",
                reference
            ))),
        }
    }
}

impl NotesBackend for InMemoryNotesBackend {
    fn append_note(
        &self,
        namespace: &NotesNamespace,
        commit: &CommitId,
        text: &str,
    ) -> Result<(), BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        let commit = Self::resolve_locked(&state, commit.as_str())?;
        let note = state
            .notes
            .entry((namespace.to_string(), commit))
            .or_default();
        if !note.is_empty() && !note.ends_with('\n') {
            note.push('\n');
        }
        note.push_str(text);
        note.push('\n');
        Ok(())
    }

    fn list_notes(&self, namespace: &NotesNamespace) -> Result<Vec<NoteEntry>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let state = self.lock();
        let ns = namespace.as_str();
        let listed = state
            .notes
            .keys()
            .chain(state.dangling.iter())
            .filter(|(n, _)| n == ns)
            .map(|(n, commit)| NoteEntry {
                note_ref: Self::note_ref(n, commit),
                commit: commit.clone(),
            })
            .collect();
        Ok(listed)
    }

    fn show_object(&self, object: &str) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let state = self.lock();
        state
            .notes
            .iter()
            .find(|((ns, commit), _)| Self::note_ref(ns, commit) == object)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| BackendError::NotFound(format!("object '{}'", object)))
    }

    fn resolve_ref(&self, reference: &str) -> Result<CommitId, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::resolve_locked(&self.lock(), reference)
    }
}
