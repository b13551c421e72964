//! CLI entrypoint for git-vote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use gitvote_infrastructure::{ConfigLoader, GitNotesBackend};
use gitvote_presentation::{Cli, CommandRunner, OutputConfig, formatter_for};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. Diagnostics go to stderr
    // so stdout carries results only.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let repo_dir = cli.repo_dir.as_deref();

    if cli.show_config {
        ConfigLoader::print_config_sources(repo_dir, cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(repo_dir, cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    let voting = file_config
        .voting_config()
        .context("Invalid [notes] configuration")?;
    let output = OutputConfig::resolve(
        cli.format.map(Into::into),
        cli.no_color,
        file_config.output.format,
        file_config.output.color,
    );
    debug!("Using notes namespace {}", voting.namespace);

    // === Dependency Injection ===
    let backend = Arc::new(GitNotesBackend::try_new(cli.repo_dir.clone())?);
    let runner = CommandRunner::new(backend, voting);
    let formatter = formatter_for(&output);

    let text = runner.run(command, formatter.as_ref())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
