//! OpenAI chat-completions client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::ports::ChatModel;
use crate::response::CompletionOutcome;
use crate::types::ChatRequest;

/// Chat-completion client for the OpenAI API
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    client: Client,
    config: ChatConfig,
}

impl OpenAiChatClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        config.validate().map_err(ChatError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ChatError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn resolve_model<'a>(&'a self, request: &'a ChatRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.config.model)
    }
}

#[async_trait]
impl ChatModel for OpenAiChatClient {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request), messages = request.messages.len()))]
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError> {
        let request = ChatRequest {
            model: Some(self.resolve_model(&request).to_string()),
            ..request
        };

        debug!("Sending chat-completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::from_transport(&e, self.config.timeout_ms))?;

        // The provider signals failure inside the body as well as via
        // the status, so decode first and classify by shape.
        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| ChatError::from_transport(&e, self.config.timeout_ms))?;

        let body: Value = serde_json::from_str(&raw).map_err(|e| {
            warn!(status = %status, "Provider body is not JSON");
            ChatError::InvalidResponse(format!("HTTP {status}: {e}"))
        })?;

        match CompletionOutcome::from_body(&body) {
            CompletionOutcome::Success(content) => {
                debug!(content_len = content.len(), "Completion received");
                Ok(content)
            },
            CompletionOutcome::ProviderError(message) => {
                warn!(status = %status, "Provider reported an error");
                Err(ChatError::Provider(message))
            },
            CompletionOutcome::UnexpectedShape(raw) => {
                warn!(status = %status, "Provider body has unexpected shape");
                Err(ChatError::UnexpectedResponse(raw))
            },
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
