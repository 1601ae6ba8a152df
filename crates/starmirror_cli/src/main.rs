//! Starmirror CLI - mirror starred repositories into a GitLab group.

mod commands;
mod config;
mod progress;
mod shutdown;

use clap::{Parser, Subcommand};
use console::Term;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starmirror")]
#[command(version)]
#[command(about = "Mirror starred repositories into a GitLab group")]
#[command(
    long_about = "Starmirror lists the repositories starred by one or more accounts on a \
GitHub-style service and mirrors them into a single group on a GitLab-style \
service: missing projects are created, drifted descriptions are updated, and \
all branches and tags are pushed through a local bare mirror."
)]
#[command(after_long_help = r#"EXAMPLES
    Mirror the configured accounts:
        $ starmirror sync

    Mirror specific accounts into a group:
        $ starmirror sync alice bob --group mirrors

    See what would change without touching anything:
        $ starmirror sync --dry-run

    Show the resolved configuration:
        $ starmirror config show

CONFIGURATION
    Starmirror reads configuration from:
      1. ~/.config/starmirror/config.toml (or $XDG_CONFIG_HOME/starmirror/config.toml)
      2. ./starmirror.toml in the current directory
      3. Environment variables (STARMIRROR_* prefix, e.g., STARMIRROR_GITLAB_TOKEN)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    STARMIRROR_GITLAB_URL         GitLab base URL (default: https://gitlab.com)
    STARMIRROR_GITLAB_GROUP       GitLab group receiving the mirrors
    STARMIRROR_GITLAB_TOKEN       GitLab personal access token
    STARMIRROR_SYNC_CONCURRENCY   Maximum repositories synced concurrently
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mirror starred repositories into the destination group
    Sync {
        /// Account name(s) whose stars are mirrored (default from config)
        accounts: Vec<String>,

        #[command(flatten)]
        sync_opts: MirrorSyncOptions,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options for a mirror sync run.
#[derive(Debug, Clone, clap::Args)]
struct MirrorSyncOptions {
    /// GitLab base URL (default: https://gitlab.com, or from config/env)
    #[arg(short = 'H', long)]
    gitlab_url: Option<String>,

    /// GitLab group receiving the mirrored projects (or from config/env)
    #[arg(short = 'g', long)]
    group: Option<String>,

    /// GitLab personal access token (or from config/env)
    #[arg(short = 't', long)]
    token: Option<String>,

    /// Source API base URL (default: https://api.github.com)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory holding the local bare mirrors (default from config or "repos")
    #[arg(short = 'd', long)]
    mirror_dir: Option<String>,

    /// Maximum repositories synced concurrently (default from config or 4)
    #[arg(short = 'c', long)]
    concurrency: Option<usize>,

    /// Dry run - show what would be done without making changes
    #[arg(short = 'n', long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved configuration with the token redacted
    Show,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Set up graceful shutdown handler (Ctrl+C)
    shutdown::setup_shutdown_handler();

    // Initialize tracing for non-TTY mode (structured logging)
    // Only initialize if not connected to a TTY
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("starmirror=info,starmirror_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }

    // Load configuration (config file -> env vars -> defaults)
    let config = config::Config::load();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync {
            accounts,
            sync_opts,
        } => {
            commands::sync::handle_sync(accounts, sync_opts, &config).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::handle_show(&config)?;
            }
        },
    }

    Ok(())
}
