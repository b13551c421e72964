//! Configuration file loading for git-vote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `GIT_VOTE_*` environment variables (`GIT_VOTE_NOTES__NAMESPACE=...`)
//! 3. Repository root: `git-vote.toml` or `.git-vote.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/git-vote/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileNotesConfig, FileOutputConfig};
pub use loader::ConfigLoader;
