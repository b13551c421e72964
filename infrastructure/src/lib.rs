//! Infrastructure layer for git-vote
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod git;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileNotesConfig, FileOutputConfig};
pub use git::GitNotesBackend;
