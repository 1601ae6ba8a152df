//! One-shot sync of starred repositories into a destination group.
//!
//! The engine lists both sides up front, pairs each starred repository
//! with its destination counterpart by mapped name, and then runs one
//! task per repository under a concurrency limit. Listing failures abort
//! the run; per-repository failures only mark that repository as failed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::error::{Result, SyncError, short_error_message};
use crate::github::GitHubClient;
use crate::gitlab::GitLabClient;
use crate::mapping::map_name;
use crate::mirror::MirrorStore;
use crate::record::RepoRecord;

use super::progress::{ProgressCallback, SyncProgress, emit};
use super::types::{SyncAction, SyncOptions, SyncReport, SyncTask};

/// Pair each source repository with its destination counterpart, if any.
fn plan_tasks(
    sources: Vec<RepoRecord>,
    dest_by_name: &HashMap<String, RepoRecord>,
    namespace_id: i64,
) -> Vec<SyncTask> {
    sources
        .into_iter()
        .map(|source| {
            let mapped_name = map_name(&source.name);
            let dest = dest_by_name.get(&mapped_name).cloned();
            SyncTask {
                source,
                dest,
                namespace_id,
                mapped_name,
            }
        })
        .collect()
}

/// Sync a single repository into the destination group.
///
/// Steps run in order and stop at the first failure:
/// 1. Create the destination project when none exists yet
/// 2. Update the description when source and destination differ
/// 3. Fetch or bare-clone the local mirror
/// 4. Push all branches to the destination
/// 5. Push all tags to the destination
///
/// In dry-run mode the work is only planned; nothing is created,
/// updated, cloned, or pushed.
async fn sync_one(
    gitlab: &GitLabClient,
    mirrors: &dyn MirrorStore,
    task: &SyncTask,
    dry_run: bool,
) -> Result<SyncAction> {
    tracing::info!(repo = %task.source.name, "syncing repository");

    let mut action = SyncAction {
        created: task.dest.is_none(),
        description_updated: false,
    };

    if dry_run {
        let dest_description = task.dest.as_ref().and_then(|d| d.description.clone());
        action.description_updated = dest_description != task.source.description;
        return Ok(action);
    }

    let dest = match &task.dest {
        Some(existing) => existing.clone(),
        None => {
            tracing::info!(repo = %task.source.name, "creating destination project");
            gitlab
                .create_project(task.namespace_id, &task.mapped_name)
                .await?
        }
    };

    if dest.description != task.source.description {
        tracing::info!(repo = %task.source.name, "updating description");
        gitlab
            .set_description(dest.id, task.source.description.as_deref())
            .await?;
        action.description_updated = true;
    }

    mirrors
        .ensure_mirror(&task.mapped_name, &task.source.clone_url)
        .await?;

    tracing::info!(repo = %task.source.name, "pushing to destination");
    mirrors
        .push_branches(&task.mapped_name, &dest.clone_url)
        .await?;
    mirrors.push_tags(&task.mapped_name, &dest.clone_url).await?;

    Ok(action)
}

/// Run sync tasks concurrently under a semaphore.
///
/// Results are collected in task order. A failed task contributes its
/// source name to the report and nothing else; the other tasks are
/// unaffected.
async fn run_tasks(
    gitlab: &GitLabClient,
    mirrors: Arc<dyn MirrorStore>,
    tasks: Vec<SyncTask>,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> SyncReport {
    let mut report = SyncReport {
        total: tasks.len(),
        ..Default::default()
    };

    if tasks.is_empty() {
        emit(
            on_progress,
            SyncProgress::SyncComplete {
                succeeded: 0,
                failed: 0,
            },
        );
        return report;
    }

    let concurrency = std::cmp::max(1, std::cmp::min(options.concurrency, tasks.len()));
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let dry_run = options.dry_run;

    emit(
        on_progress,
        SyncProgress::SyncingRepos {
            count: tasks.len(),
            concurrency,
            dry_run,
        },
    );

    let mut handles = Vec::with_capacity(tasks.len());

    for task in tasks {
        let gitlab = gitlab.clone();
        let mirrors = Arc::clone(&mirrors);
        let semaphore = Arc::clone(&semaphore);
        let name = task.source.name.clone();

        let handle = tokio::spawn(async move {
            let _permit = match semaphore.acquire().await {
                Ok(permit) => permit,
                Err(_) => return Err(SyncError::internal("semaphore closed unexpectedly")),
            };

            sync_one(&gitlab, mirrors.as_ref(), &task, dry_run).await
        });

        handles.push((name, handle));
    }

    for (name, handle) in handles {
        match handle.await {
            Ok(Ok(action)) => {
                report.succeeded += 1;
                if dry_run {
                    emit(
                        on_progress,
                        SyncProgress::RepoPlanned {
                            name,
                            create: action.created,
                            update_description: action.description_updated,
                        },
                    );
                } else {
                    emit(
                        on_progress,
                        SyncProgress::RepoSynced {
                            name,
                            created: action.created,
                        },
                    );
                }
            }
            Ok(Err(e)) => {
                tracing::warn!(repo = %name, error = %e, "sync task failed");
                emit(
                    on_progress,
                    SyncProgress::RepoFailed {
                        name: name.clone(),
                        error: short_error_message(&e),
                    },
                );
                report.failed.push(name);
            }
            Err(e) => {
                tracing::warn!(repo = %name, error = %e, "sync task panicked");
                emit(
                    on_progress,
                    SyncProgress::RepoFailed {
                        name: name.clone(),
                        error: format!("task panic: {e}"),
                    },
                );
                report.failed.push(name);
            }
        }
    }

    emit(
        on_progress,
        SyncProgress::SyncComplete {
            succeeded: report.succeeded,
            failed: report.failed.len(),
        },
    );

    report
}

/// Sync every starred repository of the source accounts into the
/// destination group.
///
/// This function:
/// 1. Lists each account's starred repositories and merges them
/// 2. Lists the projects already present in the destination group
/// 3. Resolves the group's namespace id
/// 4. Pairs each starred repository with its destination counterpart
/// 5. Syncs the pairs concurrently, one task per repository
///
/// # Arguments
///
/// * `github` - Client for the source platform
/// * `gitlab` - Client for the destination instance
/// * `mirrors` - Store holding the local bare mirrors
/// * `accounts` - Source accounts whose stars are collected
/// * `group` - Destination group all projects are created under
/// * `options` - Concurrency limit and dry-run flag
/// * `on_progress` - Optional progress callback
pub async fn sync_starred(
    github: &GitHubClient,
    gitlab: &GitLabClient,
    mirrors: Arc<dyn MirrorStore>,
    accounts: &[String],
    group: &str,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncReport> {
    let sources = github.list_all_starred(accounts, on_progress).await?;
    tracing::info!(count = sources.len(), "collected starred repositories");

    let projects = gitlab.list_group_projects(group, on_progress).await?;
    let dest_by_name: HashMap<String, RepoRecord> = projects
        .into_iter()
        .map(|project| (project.name.clone(), project))
        .collect();

    let namespace_id = gitlab.group_namespace_id(group).await?;
    emit(
        on_progress,
        SyncProgress::ResolvedNamespace {
            group: group.to_string(),
            id: namespace_id,
        },
    );

    let tasks = plan_tasks(sources, &dest_by_name, namespace_id);

    Ok(run_tasks(gitlab, mirrors, tasks, options, on_progress).await)
}
