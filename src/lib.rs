//! vibes-commit - A CLI tool that writes commit messages for staged changes.
//!
//! # Overview
//!
//! vibes-commit reads the staged diff with `git diff --staged`, asks a chat
//! completion endpoint to summarize it, and puts the result into git's
//! commit message file (when run from the `prepare-commit-msg` hook) or
//! offers it in an editable prompt and commits.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hook;
pub mod llm;
pub mod sink;
pub mod workflow;

// Re-export commonly used types
pub use config::{ApiKey, ConfigScope};
pub use error::{
    ConfigError, DiffError, GenerationError, GitError, HookError, PlacementError,
    WorkflowError,
};
pub use llm::CompletionClient;
pub use sink::{CommitSurface, Placement};
pub use workflow::{Invocation, Notifier, Stage, Workflow};
