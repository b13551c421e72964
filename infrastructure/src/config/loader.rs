//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILENAMES: [&str; 2] = ["git-vote.toml", ".git-vote.toml"];
const ENV_PREFIX: &str = "GIT_VOTE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided; must exist)
    /// 2. `GIT_VOTE_*` environment variables
    /// 3. Repository root: `git-vote.toml` or `.git-vote.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/git-vote/config.toml`
    /// 5. Default values
    ///
    /// `repo_dir` is the repository the command runs against; the current
    /// directory is used when it is `None`.
    pub fn load(
        repo_dir: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config file (first name found wins)
        if let Some(path) = Self::project_config_path(repo_dir) {
            figment = figment.merge(Toml::file(&path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/git-vote/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("git-vote").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path(repo_dir: Option<&Path>) -> Option<PathBuf> {
        let root = repo_dir.unwrap_or_else(|| Path::new("."));
        PROJECT_FILENAMES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.exists())
    }

    /// Describe every configuration layer, highest priority first
    ///
    /// Mirrors the merge order of [`load`](Self::load); layers that are not
    /// present are marked with an empty `[     ]`.
    pub fn config_sources(repo_dir: Option<&Path>, config_path: Option<&Path>) -> Vec<String> {
        let mut lines = Vec::new();

        match config_path {
            Some(path) if path.exists() => {
                lines.push(format!("  [FOUND] Explicit: {}", path.display()))
            }
            Some(path) => lines.push(format!("  [MISSING] Explicit: {}", path.display())),
            None => lines.push("  [     ] Explicit: --config <path>".to_string()),
        }

        let mut env_keys: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        env_keys.sort();
        if env_keys.is_empty() {
            lines.push(format!("  [     ] Env:      {}*", ENV_PREFIX));
        } else {
            lines.push(format!("  [FOUND] Env:      {}", env_keys.join(", ")));
        }

        match Self::project_config_path(repo_dir) {
            Some(path) => lines.push(format!("  [FOUND] Project:  {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project:  {}",
                PROJECT_FILENAMES.join(" or ")
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:   {}", mark, path.display()));
        }

        lines.push("  [FOUND] Default:  built-in defaults".to_string());
        lines
    }

    /// Print the configuration layers being used (for `--show-config`)
    pub fn print_config_sources(repo_dir: Option<&Path>, config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(repo_dir, config_path) {
            println!("{}", line);
        }
    }
}
