//! HTTP client for the chat completion endpoint.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::GenerationError;

use super::types::{ChatMessage, ChatRequest, ChatResponse};

/// Production completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";

/// Model used for every request.
pub const DEFAULT_MODEL: &str = "sonar-pro";

/// Maximum number of response body characters kept in error messages.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for a chat completion endpoint.
///
/// Sends exactly one request per call: no retry, and no timeout beyond
/// the transport defaults.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl CompletionClient {
    /// Create a client for the production endpoint.
    pub fn new() -> Result<Self, GenerationError> {
        Self::with_base_url(DEFAULT_ENDPOINT)
    }

    /// Create a client that posts to `endpoint` instead of the production URL.
    pub fn with_base_url(endpoint: impl Into<String>) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .user_agent(concat!("vibes-commit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GenerationError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `prompt` as a single user message and return the first choice's
    /// trimmed content (empty when the provider returned no choices).
    pub async fn complete(&self, prompt: &str, api_key: &str) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        debug!(
            "POST {} (model={}, prompt={} chars)",
            self.endpoint,
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(GenerationError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(GenerationError::Request)?;

        if !status.is_success() {
            debug!("Completion endpoint returned {}", status);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        debug!("Completion returned {} choice(s)", parsed.choices.len());
        Ok(parsed.first_content())
    }
}
