//! Error types for vibes-commit modules using thiserror.

use thiserror::Error;

/// Message shown when a failure carries no text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate commit message.";

/// Errors from running the git binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} exited with code {code}: {stderr}")]
    NonZeroExit {
        operation: &'static str,
        code: i32,
        stderr: String,
    },
}

/// Errors from reading the staged diff.
///
/// Every underlying cause collapses into one user-facing message.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("No staged changes found.")]
    NoStagedChanges,
}

/// Errors from the completion endpoint.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Completion request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Completion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion endpoint returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors from placing a generated message.
#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("Failed to write the commit message: {0}")]
    Surface(#[source] std::io::Error),

    #[error(transparent)]
    Commit(#[from] GitError),
}

/// Errors from reading or writing the stored credential.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to open git config: {0}")]
    Open(#[source] git2::Error),

    #[error("Failed to read '{key}' from git config: {source}")]
    Read {
        key: &'static str,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to write '{key}' to git config: {source}")]
    Write {
        key: &'static str,
        #[source]
        source: git2::Error,
    },

    #[error("API key must not be empty")]
    EmptyKey,
}

/// Errors from installing the prepare-commit-msg hook.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Not a git repository: {0}")]
    NotARepository(#[source] git2::Error),

    #[error("A prepare-commit-msg hook already exists at {0}. Use --force to overwrite.")]
    AlreadyExists(String),

    #[error("Failed to read core.hooksPath: {0}")]
    HooksPath(#[source] git2::Error),

    #[error("Failed to write hook: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Terminal failures of a single generate invocation.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("No workspace folder is open.")]
    NoWorkspace,

    #[error(
        "API Key not set. Please configure 'vibesCommitIt.apiKey' in your git config or set VIBES_COMMIT_API_KEY."
    )]
    MissingApiKey,

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl WorkflowError {
    /// The single line shown to the user for this failure.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}
