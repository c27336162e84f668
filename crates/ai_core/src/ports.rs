//! Port definitions for chat completion

use async_trait::async_trait;

use crate::error::ChatError;
use crate::types::ChatRequest;

/// Port for chat-completion implementations
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Obtain a single completion for the request.
    ///
    /// Performs exactly one outbound call; no retries.
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError>;

    /// The model used when a request does not override it
    fn model_name(&self) -> &str;
}
