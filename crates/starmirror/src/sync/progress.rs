//! Progress reporting types for sync operations.
//!
//! Every stage of a run reports through one event stream so the UI layer
//! can decide how to render it (interactive display or log lines).

/// Progress events emitted during a sync run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum SyncProgress {
    /// Starting to fetch the starred repositories of one account.
    FetchingStars {
        /// The source account being listed.
        account: String,
    },

    /// Fetched a page of starred repositories.
    FetchedStarsPage {
        /// The source account this page belongs to.
        account: String,
        /// Page number (1-indexed).
        page: u32,
        /// Number of repos on this page.
        count: usize,
        /// Running total for this account so far.
        total_so_far: usize,
    },

    /// Finished listing one account's starred repositories.
    StarsComplete {
        /// The source account that finished listing.
        account: String,
        /// Total number of repositories listed for the account.
        total: usize,
    },

    /// Starting to fetch the destination group's projects.
    FetchingProjects {
        /// The destination group being listed.
        group: String,
    },

    /// Fetched a page of destination projects.
    FetchedProjectsPage {
        /// The destination group this page belongs to.
        group: String,
        /// Page number (1-indexed).
        page: u32,
        /// Number of projects on this page.
        count: usize,
        /// Running total of projects fetched so far.
        total_so_far: usize,
    },

    /// Finished listing the destination group's projects.
    ProjectsComplete {
        /// The destination group that finished listing.
        group: String,
        /// Total number of projects listed.
        total: usize,
    },

    /// Resolved the destination group's namespace id.
    ResolvedNamespace {
        /// The destination group.
        group: String,
        /// The namespace id creation calls will use.
        id: i64,
    },

    /// Starting to sync repositories.
    SyncingRepos {
        /// Number of repos to sync.
        count: usize,
        /// Concurrency level for syncing.
        concurrency: usize,
        /// Whether this is a dry run.
        dry_run: bool,
    },

    /// Synced a single repository.
    RepoSynced {
        /// Source repository name.
        name: String,
        /// True if the destination project was created during this task.
        created: bool,
    },

    /// Planned a single repository (dry run).
    RepoPlanned {
        /// Source repository name.
        name: String,
        /// True if a destination project would be created.
        create: bool,
        /// True if the description would be updated.
        update_description: bool,
    },

    /// Failed to sync a single repository.
    RepoFailed {
        /// Source repository name.
        name: String,
        /// Short error message.
        error: String,
    },

    /// The whole run finished.
    SyncComplete {
        /// Number of tasks that succeeded.
        succeeded: usize,
        /// Number of tasks that failed.
        failed: usize,
    },

    /// Non-fatal warning.
    Warning {
        /// Warning message.
        message: String,
    },
}

/// Callback invoked for each progress event.
pub type ProgressCallback = Box<dyn Fn(SyncProgress) + Send + Sync>;

/// Emit a progress event if a callback is provided.
///
/// This is a convenience function to avoid repetitive `if let Some(cb) = ...` patterns.
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: SyncProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_with_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        let callback: ProgressCallback = Box::new(move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        emit(
            Some(&callback),
            SyncProgress::StarsComplete {
                account: "alice".to_string(),
                total: 10,
            },
        );
        emit(
            Some(&callback),
            SyncProgress::SyncComplete {
                succeeded: 9,
                failed: 1,
            },
        );

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_emit_without_callback() {
        // Should not panic when callback is None
        emit(
            None,
            SyncProgress::SyncComplete {
                succeeded: 0,
                failed: 0,
            },
        );
    }

    #[test]
    fn test_sync_progress_debug() {
        let event = SyncProgress::RepoFailed {
            name: "rust-lang/rust".to_string(),
            error: "process error: git push exited with status 1".to_string(),
        };

        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("rust-lang/rust"));
        assert!(debug_str.contains("git push"));
    }

    #[test]
    fn test_sync_progress_fetched_stars_page() {
        let event = SyncProgress::FetchedStarsPage {
            account: "alice".to_string(),
            page: 2,
            count: 100,
            total_so_far: 200,
        };

        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("FetchedStarsPage"));
        assert!(debug_str.contains("200"));
    }

    #[test]
    fn test_sync_progress_clone() {
        let event = SyncProgress::RepoPlanned {
            name: "owner/project".to_string(),
            create: true,
            update_description: false,
        };

        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("owner/project"));
    }
}
