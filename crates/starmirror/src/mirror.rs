//! Local bare mirrors and the git operations that maintain them.
//!
//! Each mapped name owns one bare repository under the store root. The
//! mirror relays history: it is cloned (or fetched) from the source, then
//! pushed to the destination. Git runs as a subprocess with both output
//! streams discarded; only the exit status matters.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Result, SyncError};

/// Directory local mirrors live under by default.
pub const DEFAULT_MIRROR_DIR: &str = "repos";

/// File whose presence inside a mirror marks it as already cloned.
const CLONE_SENTINEL: &str = "HEAD";

/// Storage for local bare mirrors, one per mapped name.
#[async_trait]
pub trait MirrorStore: Send + Sync {
    /// Bring the mirror for `mapped_name` up to date with its source:
    /// fetch when it already exists, bare-clone from `clone_url`
    /// otherwise.
    async fn ensure_mirror(&self, mapped_name: &str, clone_url: &str) -> Result<()>;

    /// Push all branches from the mirror to `dest_url`.
    async fn push_branches(&self, mapped_name: &str, dest_url: &str) -> Result<()>;

    /// Push all tags from the mirror to `dest_url`.
    async fn push_tags(&self, mapped_name: &str, dest_url: &str) -> Result<()>;
}

/// [`MirrorStore`] backed by git subprocesses under a root directory.
#[derive(Debug, Clone)]
pub struct GitMirrorStore {
    root: PathBuf,
}

impl GitMirrorStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory mirrors are created under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the mirror for `mapped_name`.
    pub fn mirror_path(&self, mapped_name: &str) -> PathBuf {
        self.root.join(mapped_name)
    }

    /// Run a git command, discarding its output streams.
    ///
    /// A non-zero exit status (or a failure to spawn at all) surfaces as
    /// a process error naming the full command.
    async fn run_git(args: &[&str]) -> Result<()> {
        tracing::debug!(command = %format!("git {}", args.join(" ")), "running git");

        let status = Command::new("git")
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| SyncError::process(format!("failed to run git: {e}")))?;

        if !status.success() {
            return Err(SyncError::process(format!(
                "git {} exited with {}",
                args.join(" "),
                status
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl MirrorStore for GitMirrorStore {
    async fn ensure_mirror(&self, mapped_name: &str, clone_url: &str) -> Result<()> {
        let path = self.mirror_path(mapped_name);

        if path.join(CLONE_SENTINEL).exists() {
            tracing::info!(mirror = %path.display(), "fetching existing mirror");
            let path = path.to_string_lossy();
            Self::run_git(&["-C", &path, "fetch"]).await
        } else {
            tracing::info!(mirror = %path.display(), "creating local mirror");
            tokio::fs::create_dir_all(&path)
                .await
                .map_err(|e| SyncError::filesystem(format!("create {}: {e}", path.display())))?;
            let path = path.to_string_lossy();
            Self::run_git(&["clone", "--bare", clone_url, &path]).await
        }
    }

    async fn push_branches(&self, mapped_name: &str, dest_url: &str) -> Result<()> {
        let path = self.mirror_path(mapped_name);
        let path = path.to_string_lossy();
        Self::run_git(&["-C", &path, "push", "--all", dest_url]).await
    }

    async fn push_tags(&self, mapped_name: &str, dest_url: &str) -> Result<()> {
        let path = self.mirror_path(mapped_name);
        let path = path.to_string_lossy();
        Self::run_git(&["-C", &path, "push", "--tags", dest_url]).await
    }
}
