//! Git subprocess execution.
//!
//! All operations shell out to the system `git` binary in argument-vector
//! form, inheriting the user's git config, hooks and credential store.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Trait for the git operations the workflow needs.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Return the output of `git diff --staged` run in `workdir`.
    async fn staged_diff(&self, workdir: &Path) -> Result<String, GitError>;

    /// Run `git commit -m <message>` in `workdir`.
    async fn commit(&self, workdir: &Path, message: &str) -> Result<(), GitError>;
}

/// Executor that calls the real git binary.
pub struct SystemGit;

#[async_trait]
impl GitExecutor for SystemGit {
    async fn staged_diff(&self, workdir: &Path) -> Result<String, GitError> {
        run_git(workdir, &["diff", "--staged"], "diff").await
    }

    async fn commit(&self, workdir: &Path, message: &str) -> Result<(), GitError> {
        run_git(workdir, &["commit", "-m", message], "commit").await?;
        Ok(())
    }
}

/// Run a git command in `workdir` and return its stdout.
async fn run_git(
    workdir: &Path,
    args: &[&str],
    operation: &'static str,
) -> Result<String, GitError> {
    debug!("Running git {} in {}", operation, workdir.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| GitError::SpawnFailed { operation, source })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(GitError::NonZeroExit {
            operation,
            code,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
