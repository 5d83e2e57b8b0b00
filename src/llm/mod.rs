//! Chat completion client and wire types.

pub mod client;
pub mod types;

pub use client::{CompletionClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use types::{ChatMessage, ChatRequest, ChatResponse};
