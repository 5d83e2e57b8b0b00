//! AI-generated commit messages.

pub mod message;
pub mod prompt;

pub use message::{MessageGenerator, generate_commit_message};
pub use prompt::build_commit_prompt;
