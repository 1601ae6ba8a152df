//! Sync of starred repositories into a destination group.
//!
//! # Module Structure
//!
//! - [`types`] - Core types: `SyncOptions`, `SyncTask`, `SyncReport`, constants
//! - [`progress`] - Progress reporting: `SyncProgress`, `ProgressCallback`, `emit()`
//! - [`engine`] - The sync run itself: `sync_starred()`
//!
//! # Example
//!
//! ```ignore
//! use starmirror::sync::{SyncOptions, sync_starred};
//!
//! let options = SyncOptions::default();
//! let report = sync_starred(
//!     &github,
//!     &gitlab,
//!     mirrors,
//!     &accounts,
//!     "mirror",
//!     &options,
//!     None,
//! )
//! .await?;
//! println!("Succeeded: {}/{}", report.succeeded, report.total);
//! ```

pub mod engine;
mod progress;
mod types;

// Re-export types
pub use types::{SyncAction, SyncOptions, SyncReport, SyncTask};

// Re-export constants
pub use types::DEFAULT_CONCURRENCY;

// Re-export progress types
pub use progress::{ProgressCallback, SyncProgress, emit};

// Re-export the engine entry point for convenience
pub use engine::sync_starred;
