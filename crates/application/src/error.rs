//! Application-level errors

use ai_core::ChatError;
use ai_speech::SpeechError;
use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (validation)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Chat-completion error
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// Speech processing error
    #[error(transparent)]
    Speech(#[from] SpeechError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::validation("bad input").into();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn chat_error_message_is_transparent() {
        let err: ApplicationError = ChatError::Provider("Invalid API Key".to_string()).into();
        assert_eq!(err.to_string(), "Provider error: Invalid API Key");
    }

    #[test]
    fn speech_error_converts() {
        let err: ApplicationError = SpeechError::SynthesisFailed("HTTP 500".to_string()).into();
        assert!(matches!(err, ApplicationError::Speech(_)));
    }
}
