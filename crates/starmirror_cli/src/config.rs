//! Configuration file support for starmirror.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `STARMIRROR_`, e.g., `STARMIRROR_GITLAB_TOKEN`)
//! 3. Config file (~/.config/starmirror/config.toml or ./starmirror.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [source]
//! accounts = ["alice", "alice-work"]
//!
//! [gitlab]
//! url = "https://gitlab.com"  # or self-hosted instance
//! group = "mirrors"
//! token = "glpat-..."  # or use STARMIRROR_GITLAB_TOKEN env var
//!
//! [sync]
//! concurrency = 4
//! mirror_dir = "repos"
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;
use starmirror::github::GITHUB_API_HOST;
use starmirror::mirror::DEFAULT_MIRROR_DIR;
use starmirror::sync::DEFAULT_CONCURRENCY;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Star source configuration.
    pub source: SourceConfig,
    /// GitLab (mirror destination) configuration.
    pub gitlab: GitLabConfig,
    /// Default sync options.
    pub sync: SyncConfig,
}

/// Star source configuration. Starred listings are public, so no token
/// is needed on this side.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Accounts whose starred repositories are mirrored.
    /// Can also be given per invocation as positional arguments to `sync`.
    pub accounts: Vec<String>,
    /// Source API base URL (e.g., "https://api.github.com").
    pub api_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            api_url: GITHUB_API_HOST.to_string(),
        }
    }
}

/// GitLab configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitLabConfig {
    /// GitLab base URL (e.g., "https://gitlab.com" or a self-hosted instance).
    /// Can also be set via STARMIRROR_GITLAB_URL environment variable.
    pub url: Option<String>,
    /// Group that receives the mirrored projects.
    /// Can also be set via STARMIRROR_GITLAB_GROUP environment variable.
    pub group: Option<String>,
    /// GitLab API token (personal access token).
    /// Can also be set via STARMIRROR_GITLAB_TOKEN environment variable.
    pub token: Option<String>,
}

impl Default for GitLabConfig {
    fn default() -> Self {
        Self {
            url: Some("https://gitlab.com".to_string()),
            group: None,
            token: None,
        }
    }
}

/// Default sync options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Maximum repositories synced concurrently.
    pub concurrency: usize,
    /// Directory holding the local bare mirrors.
    pub mirror_dir: String,
    /// Plan without making changes by default.
    pub dry_run: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            mirror_dir: DEFAULT_MIRROR_DIR.to_string(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/starmirror/config.toml)
    /// 3. Local config file (./starmirror.toml)
    /// 4. Environment variables with STARMIRROR_ prefix
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        // Add XDG config file if it exists
        if let Some(proj_dirs) = ProjectDirs::from("", "", "starmirror") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("Loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        // Add local config file (higher priority than XDG)
        let local_config = PathBuf::from("starmirror.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./starmirror.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // Add STARMIRROR_ prefixed environment variables
        // e.g., STARMIRROR_GITLAB_TOKEN -> gitlab.token
        builder = builder.add_source(
            Environment::with_prefix("STARMIRROR")
                .separator("_")
                .try_parsing(true),
        );

        // Build the config and deserialize
        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                Config::default()
            }
        }
    }

    /// Get the configured source accounts.
    pub fn source_accounts(&self) -> Vec<String> {
        self.source.accounts.clone()
    }

    /// Get the source API base URL.
    pub fn source_api_url(&self) -> String {
        self.source.api_url.clone()
    }

    /// Get the GitLab base URL.
    pub fn gitlab_url(&self) -> String {
        self.gitlab
            .url
            .clone()
            .unwrap_or_else(|| "https://gitlab.com".to_string())
    }

    /// Get the GitLab group.
    pub fn gitlab_group(&self) -> Option<String> {
        self.gitlab.group.clone()
    }

    /// Get the GitLab token.
    pub fn gitlab_token(&self) -> Option<String> {
        self.gitlab.token.clone()
    }

    /// Get the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "starmirror").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
