//! Staged diff collection.

use std::path::Path;

use tracing::debug;

use crate::error::DiffError;

use super::executor::GitExecutor;

/// Get the staged diff for `workdir`.
///
/// Any git failure (not a repository, git missing, bad exit) and an empty
/// diff all become [`DiffError::NoStagedChanges`]. The underlying cause is
/// only kept in the debug log.
pub async fn get_staged_diff<G: GitExecutor + ?Sized>(
    git: &G,
    workdir: &Path,
) -> Result<String, DiffError> {
    let diff = git.staged_diff(workdir).await.map_err(|e| {
        debug!("git diff --staged failed: {}", e);
        DiffError::NoStagedChanges
    })?;

    if diff.trim().is_empty() {
        debug!("git diff --staged produced no output");
        return Err(DiffError::NoStagedChanges);
    }

    debug!("Staged diff: {} bytes", diff.len());
    Ok(diff)
}
