//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use gitvote_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// One line per item
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for git-vote
#[derive(Parser, Debug)]
#[command(name = "git-vote")]
#[command(author, version, about = "Vote on git commits")]
#[command(long_about = r#"
Vote on git commits. Votes are stored as `vote:<user>` lines in git notes
under refs/notes/votes, so they travel with the repository.

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. GIT_VOTE_* environment     e.g. GIT_VOTE_NOTES__NAMESPACE=ballots
3. <repo>/git-vote.toml       Project-level config
4. ~/.config/git-vote/config.toml   Global config

Example:
  git-vote vote --user alice HEAD
  git-vote -r ../project tally
  git-vote elect
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Root directory of the repository to use
    #[arg(short, long, value_name = "DIR", global = true)]
    pub repo_dir: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Vote for commit
    Vote {
        /// ID of the user to vote as
        #[arg(long, value_name = "USER_ID")]
        user: Option<String>,

        /// Reference to the commit to vote for
        #[arg(value_name = "COMMIT")]
        commit: String,
    },
    /// List all votes
    List,
    /// Tally all votes
    Tally,
    /// Elect a commit
    Elect,
}
