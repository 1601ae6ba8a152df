//! Types and options for sync operations.

use crate::record::RepoRecord;

/// Default number of repositories synced in parallel.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Options controlling a sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Number of repositories synced in parallel.
    pub concurrency: usize,
    /// When true, list and plan but mutate nothing and never run git.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            dry_run: false,
        }
    }
}

/// One unit of reconciliation work, covering exactly one mapped name.
#[derive(Debug, Clone)]
pub struct SyncTask {
    /// Source repository record.
    pub source: RepoRecord,
    /// Destination record, when a project with the mapped name already
    /// exists.
    pub dest: Option<RepoRecord>,
    /// Namespace id creation calls use.
    pub namespace_id: i64,
    /// Destination project path derived from the source name.
    pub mapped_name: String,
}

/// What a task did, or in a dry run would do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncAction {
    /// The destination project was (or would be) created.
    pub created: bool,
    /// The description was (or would be) updated.
    pub description_updated: bool,
}

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Number of tasks dispatched.
    pub total: usize,
    /// Number of tasks that succeeded.
    pub succeeded: usize,
    /// Source names whose task failed, in task order.
    pub failed: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_options_default() {
        let options = SyncOptions::default();
        assert_eq!(options.concurrency, DEFAULT_CONCURRENCY);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_sync_report_default_is_empty() {
        let report = SyncReport::default();
        assert_eq!(report.total, 0);
        assert_eq!(report.succeeded, 0);
        assert!(report.failed.is_empty());
    }
}
