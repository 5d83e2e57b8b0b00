//! `prepare-commit-msg` hook installation.
//!
//! The hook fills git's commit message file with a generated message, which
//! makes the message file the commit-input surface for plain `git commit`.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};

use crate::error::HookError;

const HOOK_NAME: &str = "prepare-commit-msg";

/// Hook body. Skips generation when git already has a message source
/// (`-m`, `-F`, merge, squash, amend) and never blocks the commit.
const HOOK_SCRIPT: &str = r#"#!/bin/sh
# Installed by vibes-commit
if [ -n "$2" ]; then
    exit 0
fi
vibes-commit --message-file "$1" || true
"#;

/// Install the hook into the repository containing `workspace`.
///
/// Returns the path of the written hook.
pub fn install_hook(workspace: &Path, force: bool) -> Result<PathBuf, HookError> {
    let repo = Repository::discover(workspace).map_err(HookError::NotARepository)?;
    let hooks_dir = hooks_dir(&repo)?;
    let hook_path = hooks_dir.join(HOOK_NAME);

    if hook_path.exists() && !force {
        return Err(HookError::AlreadyExists(hook_path.display().to_string()));
    }

    std::fs::create_dir_all(&hooks_dir).map_err(HookError::WriteFailed)?;
    std::fs::write(&hook_path, HOOK_SCRIPT).map_err(HookError::WriteFailed)?;
    make_executable(&hook_path)?;

    Ok(hook_path)
}

/// The directory git runs hooks from: `core.hooksPath` when set, otherwise
/// `hooks` in the common git directory, which linked worktrees share.
fn hooks_dir(repo: &Repository) -> Result<PathBuf, HookError> {
    let config = repo.config().map_err(HookError::HooksPath)?;

    match config.get_path("core.hooksPath") {
        Ok(path) if path.is_absolute() => Ok(path),
        Ok(path) => {
            // Relative to the working tree root, or the git dir when bare
            let base = repo.workdir().unwrap_or_else(|| repo.path());
            Ok(base.join(path))
        }
        Err(e) if e.code() == ErrorCode::NotFound => Ok(repo.commondir().join("hooks")),
        Err(e) => Err(HookError::HooksPath(e)),
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), HookError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .map_err(HookError::WriteFailed)?
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).map_err(HookError::WriteFailed)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), HookError> {
    Ok(())
}
