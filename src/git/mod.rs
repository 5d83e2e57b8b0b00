//! Git operations: staged diff reading and committing via the git binary.

pub mod diff;
pub mod executor;

pub use diff::get_staged_diff;
pub use executor::{GitExecutor, SystemGit};
