//! Progress reporting for sync operations.
//!
//! This module provides two modes of progress reporting:
//! - Interactive mode (TTY): Animated progress bars using indicatif
//! - Logging mode (non-TTY): Structured logging using tracing
//!
//! Progress bars are organized as:
//! - Star bars: One per account, showing page fetching progress
//! - Project bar: Single bar for the destination group listing
//! - Sync bar: Single bar for the repository sync phase

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use console::Term;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use starmirror::sync::{ProgressCallback, SyncProgress};

/// Progress reporter that handles both interactive and logging modes.
pub enum ProgressReporter {
    /// Interactive progress bars for TTY.
    Interactive(InteractiveReporter),
    /// Structured logging for non-TTY (CI, pipes).
    Logging(LoggingReporter),
}

impl ProgressReporter {
    /// Create a new progress reporter, auto-detecting TTY mode.
    pub fn new() -> Self {
        if Term::stdout().is_term() {
            Self::Interactive(InteractiveReporter::new())
        } else {
            Self::Logging(LoggingReporter::new())
        }
    }

    /// Create an interactive reporter (for testing or forcing TTY mode).
    #[allow(dead_code)]
    pub fn interactive() -> Self {
        Self::Interactive(InteractiveReporter::new())
    }

    /// Create a logging reporter (for testing or forcing non-TTY mode).
    #[allow(dead_code)]
    pub fn logging() -> Self {
        Self::Logging(LoggingReporter::new())
    }

    /// Handle a progress event.
    pub fn handle(&self, event: SyncProgress) {
        match self {
            Self::Interactive(r) => r.handle(event),
            Self::Logging(r) => r.handle(event),
        }
    }

    /// Convert to a ProgressCallback for the library.
    pub fn as_callback(self: &Arc<Self>) -> Arc<ProgressCallback> {
        let reporter = Arc::clone(self);
        Arc::new(Box::new(move |event| {
            reporter.handle(event);
        }))
    }

    /// Finish all progress bars (interactive mode only).
    pub fn finish(&self) {
        if let Self::Interactive(r) = self {
            r.finish();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Consolidated progress state to avoid multiple mutex locks.
///
/// This struct groups all mutable progress state into a single unit,
/// ensuring consistent state updates and avoiding potential lock ordering issues.
#[derive(Default)]
struct ProgressState {
    /// Star-listing bars by account name.
    star_bars: HashMap<String, ProgressBar>,
    /// Single bar for the destination project listing.
    project_bar: Option<ProgressBar>,
    /// Single bar for the repository sync phase.
    sync_bar: Option<ProgressBar>,
}

/// Interactive progress reporter using indicatif.
///
/// Uses separate progress bars for each phase:
/// - Star bars: One per account, showing page fetching
/// - Project bar: Single bar for the destination group listing
/// - Sync bar: Single bar for creating, updating and pushing repositories
///
/// All mutable state is consolidated into a single `Mutex<ProgressState>`
/// to ensure consistent updates and avoid lock ordering issues.
pub struct InteractiveReporter {
    multi: MultiProgress,
    /// Consolidated progress state under a single lock.
    state: Mutex<ProgressState>,
}

impl InteractiveReporter {
    /// Create a new interactive reporter.
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            state: Mutex::new(ProgressState::default()),
        }
    }

    /// Handle a progress event.
    ///
    /// All state access is done through a single lock on `self.state`,
    /// avoiding potential deadlocks from multiple lock acquisitions.
    pub fn handle(&self, event: SyncProgress) {
        // Acquire single lock for all state access
        let mut state = self.state.lock().unwrap();

        match event {
            SyncProgress::FetchingStars { account } => {
                let pb = self.multi.add(ProgressBar::new_spinner());
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(std::time::Duration::from_millis(100));
                pb.set_prefix(format!("{:12}", account));
                pb.set_message("Fetching stars...");

                state.star_bars.insert(account, pb);
            }

            SyncProgress::FetchedStarsPage {
                account,
                page,
                count: _,
                total_so_far,
            } => {
                if let Some(pb) = state.star_bars.get(&account) {
                    pb.set_message(format!("Page {} ({} stars)", page, total_so_far));
                }
            }

            SyncProgress::StarsComplete { account, total } => {
                if let Some(pb) = state.star_bars.get(&account) {
                    pb.finish_with_message(format!("✓ {} stars", total));
                }
            }

            SyncProgress::FetchingProjects { group } => {
                let pb = self.multi.add(ProgressBar::new_spinner());
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(std::time::Duration::from_millis(100));
                pb.set_prefix(format!("{:12}", group));
                pb.set_message("Listing projects...");

                state.project_bar = Some(pb);
            }

            SyncProgress::FetchedProjectsPage {
                group: _,
                page,
                count: _,
                total_so_far,
            } => {
                if let Some(ref pb) = state.project_bar {
                    pb.set_message(format!("Page {} ({} projects)", page, total_so_far));
                }
            }

            SyncProgress::ProjectsComplete { group: _, total } => {
                if let Some(ref pb) = state.project_bar {
                    pb.finish_with_message(format!("✓ {} projects", total));
                }
            }

            SyncProgress::ResolvedNamespace { .. } => {
                // No-op for interactive mode
            }

            SyncProgress::SyncingRepos {
                count,
                concurrency: _,
                dry_run,
            } => {
                let pb = self.multi.add(ProgressBar::new(count as u64));
                pb.set_style(Self::bar_style());
                let action = if dry_run { "Checking" } else { "Syncing" };
                pb.set_prefix(format!("{:12}", action));
                pb.set_message(format!("{}...", action));

                state.sync_bar = Some(pb);
            }

            SyncProgress::RepoSynced { name, created } => {
                if let Some(ref pb) = state.sync_bar {
                    pb.inc(1);
                    let symbol = if created { "+" } else { "·" };
                    pb.set_message(format!("{} {}", symbol, name));
                }
            }

            SyncProgress::RepoPlanned {
                name,
                create,
                update_description,
            } => {
                if let Some(ref pb) = state.sync_bar {
                    pb.inc(1);
                    let msg = if create {
                        format!("+ {} (would create)", name)
                    } else if update_description {
                        format!("~ {} (would update description)", name)
                    } else {
                        format!("· {}", name)
                    };
                    pb.set_message(msg);
                }
            }

            SyncProgress::RepoFailed { name, error } => {
                if let Some(ref pb) = state.sync_bar {
                    pb.inc(1);
                    pb.set_message(format!("✗ {}: {}", name, error));
                }
            }

            SyncProgress::SyncComplete { succeeded, failed } => {
                if let Some(ref pb) = state.sync_bar {
                    let msg = if failed > 0 {
                        format!("✓ {} synced, {} failed", succeeded, failed)
                    } else {
                        format!("✓ {} synced", succeeded)
                    };
                    pb.finish_with_message(msg);
                }
            }

            SyncProgress::Warning { message } => {
                // Release lock before printing to avoid holding it during I/O
                drop(state);
                self.multi.println(format!("⚠ {}", message)).ok();
            }

            _ => {}
        }
    }

    /// Finish all progress bars.
    pub fn finish(&self) {
        let state = self.state.lock().unwrap();
        for pb in state.star_bars.values() {
            if !pb.is_finished() {
                pb.finish();
            }
        }
        if let Some(ref pb) = state.project_bar {
            if !pb.is_finished() {
                pb.finish();
            }
        }
        if let Some(ref pb) = state.sync_bar {
            if !pb.is_finished() {
                pb.finish();
            }
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.cyan} {spinner:.green} {msg}")
            .expect("Invalid template")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}/{len:3} {msg}")
            .expect("Invalid template")
            .progress_chars("█▓░")
    }
}

impl Default for InteractiveReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Logging reporter using tracing for structured output.
pub struct LoggingReporter;

impl LoggingReporter {
    /// Create a new logging reporter.
    pub fn new() -> Self {
        Self
    }

    /// Handle a progress event.
    pub fn handle(&self, event: SyncProgress) {
        match event {
            SyncProgress::FetchingStars { account } => {
                tracing::info!(account = %account, "Fetching starred repositories");
            }

            SyncProgress::FetchedStarsPage {
                account,
                page,
                count,
                total_so_far,
            } => {
                tracing::debug!(account = %account, page, count, total_so_far, "Fetched stars page");
            }

            SyncProgress::StarsComplete { account, total } => {
                tracing::info!(account = %account, total, "Stars listing complete");
            }

            SyncProgress::FetchingProjects { group } => {
                tracing::info!(group = %group, "Listing destination projects");
            }

            SyncProgress::FetchedProjectsPage {
                group,
                page,
                count,
                total_so_far,
            } => {
                tracing::debug!(group = %group, page, count, total_so_far, "Fetched projects page");
            }

            SyncProgress::ProjectsComplete { group, total } => {
                tracing::info!(group = %group, total, "Project listing complete");
            }

            SyncProgress::ResolvedNamespace { group, id } => {
                tracing::debug!(group = %group, id, "Resolved group namespace");
            }

            SyncProgress::SyncingRepos {
                count,
                concurrency,
                dry_run,
            } => {
                tracing::info!(count, concurrency, dry_run, "Syncing repositories");
            }

            SyncProgress::RepoSynced { name, created } => {
                if created {
                    tracing::info!(repo = %name, "Created and synced");
                } else {
                    tracing::info!(repo = %name, "Synced");
                }
            }

            SyncProgress::RepoPlanned {
                name,
                create,
                update_description,
            } => {
                tracing::info!(repo = %name, create, update_description, "Planned");
            }

            SyncProgress::RepoFailed { name, error } => {
                tracing::warn!(repo = %name, error = %error, "Failed to sync");
            }

            SyncProgress::SyncComplete { succeeded, failed } => {
                tracing::info!(succeeded, failed, "Sync complete");
            }

            SyncProgress::Warning { message } => {
                tracing::warn!(message = %message, "Warning");
            }

            _ => {}
        }
    }
}

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}
