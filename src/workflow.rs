//! The generate workflow: workspace -> credential -> diff -> message -> placement.
//!
//! Each invocation runs once, start to finish, and keeps no state. Any
//! failure ends the run and is reported to the user exactly once.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commit::MessageGenerator;
use crate::config::ApiKey;
use crate::error::WorkflowError;
use crate::git::{GitExecutor, get_staged_diff};
use crate::sink::{CommitSurface, MessagePrompt, Placement, place_message};

/// Workflow stages, in order. `Failed` is reachable from every stage after
/// `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ResolveWorkspace,
    ResolveCredential,
    FetchDiff,
    Generate,
    Place,
    Failed,
}

/// Everything one invocation needs, resolved before the workflow starts.
pub struct Invocation {
    pub workspace: Option<PathBuf>,
    pub api_key: Option<ApiKey>,
    pub surface: CommitSurface,
}

/// Destination for user-facing error notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Prints notifications to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}

/// The generate command, wired to its collaborators.
pub struct Workflow<G, M, P> {
    git: G,
    generator: M,
    prompt: P,
}

impl<G, M, P> Workflow<G, M, P>
where
    G: GitExecutor,
    M: MessageGenerator,
    P: MessagePrompt,
{
    pub fn new(git: G, generator: M, prompt: P) -> Self {
        Self {
            git,
            generator,
            prompt,
        }
    }

    /// Run the workflow and report any failure through `notifier`.
    ///
    /// Returns `None` when the run failed (after exactly one notification).
    pub async fn execute<N: Notifier + ?Sized>(
        &self,
        invocation: Invocation,
        notifier: &N,
    ) -> Option<Placement> {
        match self.run(invocation).await {
            Ok(placement) => {
                enter(Stage::Idle);
                Some(placement)
            }
            Err(e) => {
                enter(Stage::Failed);
                notifier.error(&e.user_message());
                None
            }
        }
    }

    /// Run the workflow, returning the first failure.
    pub async fn run(&self, invocation: Invocation) -> Result<Placement, WorkflowError> {
        let Invocation {
            workspace,
            api_key,
            mut surface,
        } = invocation;

        enter(Stage::ResolveWorkspace);
        let workdir = resolve_workspace(workspace.as_deref()).ok_or(WorkflowError::NoWorkspace)?;

        enter(Stage::ResolveCredential);
        let api_key = api_key.ok_or(WorkflowError::MissingApiKey)?;

        enter(Stage::FetchDiff);
        let diff = get_staged_diff(&self.git, &workdir).await?;

        enter(Stage::Generate);
        let message = self.generator.generate(&diff, api_key.expose()).await?;

        enter(Stage::Place);
        let placement =
            place_message(&mut surface, &self.prompt, &self.git, &message, &workdir).await?;

        debug!("Placement: {:?}", placement);
        Ok(placement)
    }
}

fn enter(stage: Stage) {
    debug!("Stage: {:?}", stage);
}

/// Canonical workspace directory, or `None` if there is no usable one.
fn resolve_workspace(workspace: Option<&Path>) -> Option<PathBuf> {
    let path = workspace?;
    std::fs::canonicalize(path).ok().filter(|p| p.is_dir())
}
