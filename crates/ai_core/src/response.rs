//! Response normalization
//!
//! The provider reports success and failure inside the JSON body, not
//! only through the HTTP status. Normalization therefore inspects the
//! decoded body and produces a tagged outcome, so callers can never
//! treat an error body as generated content.

use serde_json::Value;

/// Normalized chat-completion outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The first choice's message content
    Success(String),
    /// The provider reported an error; its message, verbatim
    ProviderError(String),
    /// The body matched neither documented shape; raw body attached
    UnexpectedShape(String),
}

impl CompletionOutcome {
    /// Classify a decoded provider body.
    ///
    /// A non-empty `choices` list wins; otherwise an `error.message`
    /// field is relayed; anything else is unexpected.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        if let Some(content) = first_choice_content(body) {
            return Self::Success(content);
        }
        if let Some(message) = body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return Self::ProviderError(message.to_string());
        }
        Self::UnexpectedShape(body.to_string())
    }
}

fn first_choice_content(body: &Value) -> Option<String> {
    body.get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}
