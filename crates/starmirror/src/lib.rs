//! Starmirror - mirror starred repositories into a GitLab group.
//!
//! This library collects the repositories starred by one or more GitHub
//! accounts, creates a matching project for each one under a GitLab
//! group, and pushes full history into it through a local bare mirror.
//! A run is one-shot: list both sides, pair them up, sync every pair,
//! report the outcome.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use starmirror::github::{GITHUB_API_HOST, GitHubClient};
//! use starmirror::gitlab::GitLabClient;
//! use starmirror::mirror::GitMirrorStore;
//! use starmirror::sync::{SyncOptions, sync_starred};
//!
//! let github = GitHubClient::new(GITHUB_API_HOST)?;
//! let gitlab = GitLabClient::new("https://gitlab.example.com", &token)?;
//! let mirrors = Arc::new(GitMirrorStore::new("repos"));
//!
//! let report = sync_starred(
//!     &github,
//!     &gitlab,
//!     mirrors,
//!     &["octocat".to_string()],
//!     "mirror",
//!     &SyncOptions::default(),
//!     None,
//! )
//! .await?;
//! println!("Succeeded: {}/{}", report.succeeded, report.total);
//! ```

pub mod error;
pub mod github;
pub mod gitlab;
pub mod http;
pub mod mapping;
pub mod mirror;
pub mod record;
pub mod sync;

pub use error::{Result, SyncError, short_error_message};
pub use record::RepoRecord;
