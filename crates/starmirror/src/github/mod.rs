//! GitHub API client for listing starred repositories.
//!
//! This module talks to the public starred-repositories endpoint of a
//! GitHub-style API: per-account pagination, aggregation across accounts
//! and conversion into the synchronizer's record form. Listings are
//! unauthenticated.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`types`] - Wire data structures
//! - [`client`] - Client creation and listing operations
//! - [`convert`] - Conversion into [`crate::record::RepoRecord`]
//!
//! # Listing
//!
//! ```ignore
//! use starmirror::github::GitHubClient;
//!
//! let client = GitHubClient::new("https://api.github.com")?;
//! let records = client
//!     .list_all_starred(&["alice".to_string(), "bob".to_string()], None)
//!     .await?;
//! println!("{} starred repositories", records.len());
//! ```

mod client;
mod convert;
mod error;
mod types;

// Re-export error types
pub use error::GitHubError;

// Re-export types
pub use types::GitHubRepo;

// Re-export client
pub use client::{GITHUB_API_HOST, GitHubClient};

// Re-export conversion
pub use convert::to_record;
