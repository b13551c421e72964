//! Notes backend using the `git` CLI.
//!
//! Every primitive is one blocking `git` invocation:
//!
//! | Primitive | Command |
//! |-----------|---------|
//! | append    | `git notes --ref NS append --allow-empty -m TEXT COMMIT` |
//! | list      | `git notes --ref NS list` |
//! | show      | `git show OBJECT` |
//! | resolve   | `git rev-parse --verify --quiet REF^{commit}` |

use gitvote_application::ports::notes_backend::{BackendError, NoteEntry, NotesBackend};
use gitvote_domain::{CommitId, NotesNamespace};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace};

const GIT: &str = "git";

/// Stores votes in git notes of a local repository.
///
/// Created via `try_new()`, which checks that `git` is on the `PATH`.
pub struct GitNotesBackend {
    repo_dir: Option<PathBuf>,
}

impl GitNotesBackend {
    /// Create a backend operating on `repo_dir` (the current directory if `None`).
    pub fn try_new(repo_dir: Option<PathBuf>) -> Result<Self, BackendError> {
        which::which(GIT).map_err(|e| BackendError::Spawn {
            program: GIT.to_string(),
            message: e.to_string(),
        })?;
        debug!("Using git notes backend in {:?}", repo_dir);
        Ok(Self { repo_dir })
    }

    pub fn repo_dir(&self) -> Option<&Path> {
        self.repo_dir.as_deref()
    }

    /// Run git with `args`, returning stdout on success.
    fn git(&self, args: &[&str]) -> Result<String, BackendError> {
        let command_line = format!("{} {}", GIT, args.join(" "));
        trace!("Running {}", command_line);

        let mut cmd = Command::new(GIT);
        cmd.args(args);
        if let Some(ref dir) = self.repo_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| BackendError::Spawn {
            program: GIT.to_string(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackendError::CommandFailed {
                command: command_line,
                stderr: stderr.trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| {
            BackendError::InvalidOutput(format!("{} returned non UTF-8 output: {}", command_line, e))
        })
    }
}

impl NotesBackend for GitNotesBackend {
    fn append_note(
        &self,
        namespace: &NotesNamespace,
        commit: &CommitId,
        text: &str,
    ) -> Result<(), BackendError> {
        self.git(&[
            "notes",
            "--ref",
            namespace.as_str(),
            "append",
            "--allow-empty",
            "-m",
            text,
            commit.as_str(),
        ])?;
        Ok(())
    }

    fn list_notes(&self, namespace: &NotesNamespace) -> Result<Vec<NoteEntry>, BackendError> {
        let stdout = self.git(&["notes", "--ref", namespace.as_str(), "list"])?;
        parse_notes_listing(&stdout)
    }

    fn show_object(&self, object: &str) -> Result<String, BackendError> {
        self.git(&["show", object])
    }

    fn resolve_ref(&self, reference: &str) -> Result<CommitId, BackendError> {
        let rev = format!("{}^{{commit}}", reference);
        let stdout = match self.git(&["rev-parse", "--verify", "--quiet", &rev]) {
            Ok(stdout) => stdout,
            // `--quiet` silences "no such ref"; any other failure has stderr
            Err(BackendError::CommandFailed { ref stderr, .. }) if stderr.is_empty() => {
                return Err(BackendError::NotFound(format!(
                    "unknown revision '{}'",
                    reference
                )));
            }
            Err(e) => return Err(e),
        };

        CommitId::new(stdout.trim())
            .map_err(|e| BackendError::InvalidOutput(format!("rev-parse {}: {}", reference, e)))
    }
}

/// Parse `git notes list` output: one `<note object> <annotated object>` pair per line.
fn parse_notes_listing(output: &str) -> Result<Vec<NoteEntry>, BackendError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(note_ref), Some(commit), None) => Ok(NoteEntry {
                    note_ref: note_ref.to_string(),
                    commit: CommitId::new(commit)
                        .map_err(|_| BackendError::MalformedListing(line.to_string()))?,
                }),
                _ => Err(BackendError::MalformedListing(line.to_string())),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing() {
        let output = "1111111111111111111111111111111111111111 aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\n\
                      2222222222222222222222222222222222222222 bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb\n";
        let entries = parse_notes_listing(output).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].note_ref, "1111111111111111111111111111111111111111");
        assert_eq!(
            entries[1].commit.as_str(),
            "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
        );
    }

    #[test]
    fn test_parse_listing_empty() {
        assert!(parse_notes_listing("").unwrap().is_empty());
        assert!(parse_notes_listing("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_listing_malformed() {
        for bad in ["onlyonefield", "a b c"] {
            assert_eq!(
                parse_notes_listing(bad),
                Err(BackendError::MalformedListing(bad.to_string()))
            );
        }
    }

    /// Run git in `dir` for test setup.
    fn setup_git(dir: &Path, args: &[&str]) -> String {
        let output = Command::new(GIT)
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// A repository with one empty commit, or `None` when git is unavailable.
    fn init_repo() -> Option<(tempfile::TempDir, String)> {
        which::which(GIT).ok()?;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path();
        setup_git(path, &["init", "--quiet"]);
        setup_git(path, &["config", "user.name", "Test"]);
        setup_git(path, &["config", "user.email", "test@example.com"]);
        setup_git(path, &["config", "commit.gpgsign", "false"]);
        setup_git(path, &["commit", "--quiet", "--allow-empty", "-m", "init"]);
        let head = setup_git(path, &["rev-parse", "HEAD"]);
        Some((dir, head))
    }

    #[test]
    fn test_git_round_trip() {
        let Some((dir, head)) = init_repo() else {
            return;
        };
        let backend = GitNotesBackend::try_new(Some(dir.path().to_path_buf())).unwrap();
        let ns = NotesNamespace::default();
        let commit = CommitId::new(head.as_str()).unwrap();

        assert_eq!(backend.resolve_ref("HEAD").unwrap(), commit);

        backend.append_note(&ns, &commit, "vote:alice").unwrap();
        backend.append_note(&ns, &commit, "vote:bob").unwrap();

        let entries = backend.list_notes(&ns).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].commit, commit);

        let content = backend.show_object(&entries[0].note_ref).unwrap();
        let lines: Vec<_> = content.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["vote:alice", "vote:bob"]);
    }

    #[test]
    fn test_git_unknown_revision() {
        let Some((dir, _)) = init_repo() else {
            return;
        };
        let backend = GitNotesBackend::try_new(Some(dir.path().to_path_buf())).unwrap();
        assert!(matches!(
            backend.resolve_ref("no-such-branch"),
            Err(BackendError::NotFound(_))
        ));
    }

    #[test]
    fn test_git_resolve_outside_repository_keeps_stderr() {
        if which::which(GIT).is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let backend = GitNotesBackend::try_new(Some(dir.path().to_path_buf())).unwrap();

        match backend.resolve_ref("HEAD") {
            Err(BackendError::CommandFailed { command, stderr }) => {
                assert!(command.contains("rev-parse"));
                assert!(stderr.contains("not a git repository"), "stderr: {stderr}");
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }
}
