//! Git adapters.
//!
//! Implements the notes backend port by running the `git` binary.

mod backend;

pub use backend::GitNotesBackend;
