use std::sync::Arc;

use console::Term;
use starmirror::github::GitHubClient;
use starmirror::gitlab::GitLabClient;
use starmirror::mirror::GitMirrorStore;
use starmirror::sync::{SyncOptions, sync_starred};

use crate::MirrorSyncOptions;
use crate::config;
use crate::progress::ProgressReporter;
use crate::shutdown::is_shutdown_requested;

pub(crate) async fn handle_sync(
    accounts: Vec<String>,
    sync_opts: MirrorSyncOptions,
    config: &config::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    // Merge CLI args with config defaults
    let accounts = if accounts.is_empty() {
        config.source_accounts()
    } else {
        accounts
    };
    if accounts.is_empty() {
        return Err(
            "No accounts to mirror. Pass account names to `sync` or set [source] accounts \
             in the config file."
                .into(),
        );
    }

    let api_url = sync_opts
        .api_url
        .unwrap_or_else(|| config.source_api_url());
    let gitlab_url = sync_opts
        .gitlab_url
        .unwrap_or_else(|| config.gitlab_url());
    let group = match sync_opts.group.or_else(|| config.gitlab_group()) {
        Some(group) => group,
        None => {
            return Err(
                "No GitLab group configured. Set --group or STARMIRROR_GITLAB_GROUP.".into(),
            );
        }
    };
    let token = match sync_opts.token.or_else(|| config.gitlab_token()) {
        Some(token) => token,
        None => {
            return Err(
                "No GitLab token configured. Set --token or STARMIRROR_GITLAB_TOKEN.".into(),
            );
        }
    };
    let concurrency = sync_opts.concurrency.unwrap_or(config.sync.concurrency);
    let mirror_dir = sync_opts
        .mirror_dir
        .unwrap_or_else(|| config.sync.mirror_dir.clone());
    let dry_run = sync_opts.dry_run || config.sync.dry_run;

    let github = GitHubClient::new(&api_url)?;
    let gitlab = GitLabClient::new(&gitlab_url, &token)?;
    let mirrors = Arc::new(GitMirrorStore::new(mirror_dir));

    let options = SyncOptions {
        concurrency,
        dry_run,
    };

    let is_tty = Term::stdout().is_term();

    if options.dry_run && is_tty {
        println!("DRY RUN - no changes will be made\n");
    }

    // Create progress reporter (auto-detects TTY)
    let reporter = Arc::new(ProgressReporter::new());
    let progress = reporter.as_callback();

    let report = sync_starred(
        &github,
        &gitlab,
        mirrors,
        &accounts,
        &group,
        &options,
        Some(&*progress),
    )
    .await?;

    // Finish progress bars before printing summary
    reporter.finish();

    // Check if shutdown was requested
    let was_interrupted = is_shutdown_requested();

    if is_tty {
        if was_interrupted {
            println!("\n(Interrupted by user - the in-flight run was allowed to finish)");
        }
        println!("\nSucceeded: {}/{}", report.succeeded, report.total);
        if !report.failed.is_empty() {
            println!("\nFailed repositories:");
            for name in &report.failed {
                println!("  - {}", name);
            }
        }
    } else {
        if was_interrupted {
            tracing::info!("Shutdown was requested during the run");
        }
        tracing::info!(
            succeeded = report.succeeded,
            total = report.total,
            failed = report.failed.len(),
            "Sync finished"
        );
        for name in &report.failed {
            tracing::warn!(repo = %name, "Failed to sync");
        }
    }

    Ok(())
}
