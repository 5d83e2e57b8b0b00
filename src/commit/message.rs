//! Commit message generation via the completion endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::commit::prompt::build_commit_prompt;
use crate::error::GenerationError;
use crate::llm::CompletionClient;

/// Trait for turning a staged diff into a commit message.
///
/// This abstraction allows mocking the completion endpoint in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Generate a commit message for `diff`, authorized by `api_key`.
    async fn generate(&self, diff: &str, api_key: &str) -> Result<String, GenerationError>;
}

#[async_trait]
impl MessageGenerator for CompletionClient {
    async fn generate(&self, diff: &str, api_key: &str) -> Result<String, GenerationError> {
        generate_commit_message(self, diff, api_key).await
    }
}

/// Generate a commit message from the diff using the completion endpoint.
///
/// Returns the trimmed content of the first choice. An empty string means
/// the provider returned no content; it is not treated as an error.
pub async fn generate_commit_message(
    client: &CompletionClient,
    diff: &str,
    api_key: &str,
) -> Result<String, GenerationError> {
    let prompt = build_commit_prompt(diff);
    let message = client.complete(&prompt, api_key).await?;

    if message.is_empty() {
        debug!("Completion endpoint returned no content");
    } else {
        debug!("Generated commit message: {} chars", message.len());
    }

    Ok(message)
}
