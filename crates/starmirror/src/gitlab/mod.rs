//! GitLab API client for the destination group.
//!
//! This module covers everything the synchronizer does against the
//! destination service: group namespace lookup, group project listing,
//! project creation and description updates. Every request is
//! authenticated with a private token header.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitLab API operations
//! - [`types`] - Wire data structures
//! - [`client`] - Client creation, listing and mutation operations
//! - [`convert`] - Conversion into [`crate::record::RepoRecord`]
//!
//! # Usage
//!
//! ```ignore
//! use starmirror::gitlab::GitLabClient;
//!
//! let client = GitLabClient::new("https://gitlab.example.com", "token")?;
//! let namespace_id = client.group_namespace_id("mirrors").await?;
//! let existing = client.list_group_projects("mirrors", None).await?;
//! ```

mod client;
mod convert;
mod error;
mod types;

// Re-export error types
pub use error::GitLabError;

// Re-export types
pub use types::{GitLabGroup, GitLabProject};

// Re-export client
pub use client::GitLabClient;

// Re-export conversion
pub use convert::to_record;
