//! Placing a generated message: the commit-input surface when there is one,
//! otherwise an edit-and-commit prompt.

pub mod prompt;
pub mod surface;

use std::path::Path;

use tracing::debug;

use crate::error::PlacementError;
use crate::git::GitExecutor;

pub use prompt::{MessagePrompt, TerminalPrompt};
pub use surface::{CommitInput, CommitSurface, MessageFile};

/// What happened to the generated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Written to the commit-input surface; the user commits from there.
    SurfaceUpdated,
    /// Confirmed at the prompt and committed with this message.
    Committed(String),
    /// The prompt produced no value. Nothing was committed.
    Cancelled,
}

/// Place `message` for `workdir`.
///
/// Writing to an available surface never commits, and a failed write is
/// returned as an error without prompting. Only the prompt path runs
/// `git commit`, and only for non-empty confirmed text.
pub async fn place_message<G, P>(
    surface: &mut CommitSurface,
    prompt: &P,
    git: &G,
    message: &str,
    workdir: &Path,
) -> Result<Placement, PlacementError>
where
    G: GitExecutor + ?Sized,
    P: MessagePrompt + ?Sized,
{
    if let CommitSurface::Available(input) = surface {
        input.set_value(message).map_err(PlacementError::Surface)?;
        input.reveal();
        return Ok(Placement::SurfaceUpdated);
    }

    let confirmed = match prompt.edit(message) {
        Some(text) if !text.is_empty() => text,
        _ => {
            debug!("Commit message prompt cancelled");
            return Ok(Placement::Cancelled);
        }
    };

    git.commit(workdir, &confirmed).await?;
    Ok(Placement::Committed(confirmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitError;
    use crate::git::executor::MockGitExecutor;
    use mockall::predicate::{always, eq};
    use super::prompt::MockMessagePrompt;
    use super::surface::MockCommitInput;

    #[tokio::test]
    async fn test_available_surface_is_written_and_revealed() {
        let mut input = MockCommitInput::new();
        input
            .expect_set_value()
            .with(eq("Add hello to x.txt"))
            .times(1)
            .returning(|_| Ok(()));
        input.expect_reveal().times(1).return_const(());
        let mut surface = CommitSurface::Available(Box::new(input));

        let mut prompt = MockMessagePrompt::new();
        prompt.expect_edit().never();
        let mut git = MockGitExecutor::new();
        git.expect_commit().never();

        let placement = place_message(
            &mut surface,
            &prompt,
            &git,
            "Add hello to x.txt",
            Path::new("/repo"),
        )
        .await
        .unwrap();

        assert_eq!(placement, Placement::SurfaceUpdated);
    }

    #[tokio::test]
    async fn test_unavailable_surface_prompts_then_commits() {
        let mut surface = CommitSurface::Unavailable;

        let mut prompt = MockMessagePrompt::new();
        prompt
            .expect_edit()
            .with(eq("fix login"))
            .times(1)
            .returning(|_| Some("Fix login bug".to_string()));
        let mut git = MockGitExecutor::new();
        git.expect_commit()
            .with(eq(Path::new("/repo")), eq("Fix login bug"))
            .times(1)
            .returning(|_, _| Ok(()));

        let placement = place_message(&mut surface, &prompt, &git, "fix login", Path::new("/repo"))
            .await
            .unwrap();

        assert_eq!(placement, Placement::Committed("Fix login bug".to_string()));
    }

    #[tokio::test]
    async fn test_cancelled_prompt_does_not_commit() {
        let mut surface = CommitSurface::Unavailable;

        let mut prompt = MockMessagePrompt::new();
        prompt.expect_edit().times(1).returning(|_| None);
        let mut git = MockGitExecutor::new();
        git.expect_commit().never();

        let placement = place_message(&mut surface, &prompt, &git, "msg", Path::new("/repo"))
            .await
            .unwrap();

        assert_eq!(placement, Placement::Cancelled);
    }

    #[tokio::test]
    async fn test_empty_confirmation_does_not_commit() {
        let mut surface = CommitSurface::Unavailable;

        let mut prompt = MockMessagePrompt::new();
        prompt.expect_edit().times(1).returning(|_| Some(String::new()));
        let mut git = MockGitExecutor::new();
        git.expect_commit().never();

        let placement = place_message(&mut surface, &prompt, &git, "msg", Path::new("/repo"))
            .await
            .unwrap();

        assert_eq!(placement, Placement::Cancelled);
    }

    #[tokio::test]
    async fn test_whitespace_confirmation_is_handed_to_git() {
        let mut surface = CommitSurface::Unavailable;

        let mut prompt = MockMessagePrompt::new();
        prompt.expect_edit().times(1).returning(|_| Some("   ".to_string()));
        let mut git = MockGitExecutor::new();
        git.expect_commit()
            .with(always(), eq("   "))
            .times(1)
            .returning(|_, _| {
                Err(GitError::NonZeroExit {
                    operation: "commit",
                    code: 1,
                    stderr: "Aborting commit due to empty commit message.".to_string(),
                })
            });

        let result = place_message(&mut surface, &prompt, &git, "msg", Path::new("/repo")).await;
        assert!(matches!(
            result,
            Err(PlacementError::Commit(GitError::NonZeroExit { code: 1, .. }))
        ));
    }

    #[tokio::test]
    async fn test_failed_surface_write_is_an_error_without_prompting() {
        let mut input = MockCommitInput::new();
        input
            .expect_set_value()
            .times(1)
            .returning(|_| Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")));
        input.expect_reveal().never();
        let mut surface = CommitSurface::Available(Box::new(input));

        let mut prompt = MockMessagePrompt::new();
        prompt.expect_edit().never();
        let mut git = MockGitExecutor::new();
        git.expect_commit().never();

        let result = place_message(&mut surface, &prompt, &git, "msg", Path::new("/repo")).await;
        assert!(matches!(result, Err(PlacementError::Surface(_))));
    }

    #[tokio::test]
    async fn test_commit_failure_propagates() {
        let mut surface = CommitSurface::Unavailable;

        let mut prompt = MockMessagePrompt::new();
        prompt.expect_edit().returning(|_| Some("msg".to_string()));
        let mut git = MockGitExecutor::new();
        git.expect_commit().with(always(), always()).returning(|_, _| {
            Err(GitError::NonZeroExit {
                operation: "commit",
                code: 1,
                stderr: "nothing added to commit".to_string(),
            })
        });

        let result = place_message(&mut surface, &prompt, &git, "msg", Path::new("/repo")).await;
        assert!(matches!(
            result,
            Err(PlacementError::Commit(GitError::NonZeroExit { code: 1, .. }))
        ));
    }
}
