//! API error handling
//!
//! Every failure surfaces as a JSON body with a single `error` field.
//! Validation problems are the caller's fault and map to 400; anything
//! that goes wrong after validation maps to 500, with the provider's
//! own message relayed when one exists.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Upstream(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Chat(e) => Self::Upstream(e.to_string()),
            ApplicationError::Speech(e) => Self::Upstream(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use ai_core::ChatError;
    use ai_speech::SpeechError;

    use super::*;

    #[test]
    fn bad_request_message_is_bare() {
        let err = ApiError::BadRequest("people must be at least 1".to_string());
        assert_eq!(err.to_string(), "people must be at least 1");
    }

    #[test]
    fn into_response_bad_request() {
        let err = ApiError::BadRequest("invalid".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_upstream_is_internal_server_error() {
        let err = ApiError::Upstream("Provider error: Invalid API Key".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn domain_error_converts_to_bad_request() {
        let source = ApplicationError::Domain(domain::DomainError::validation("bad input"));
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::BadRequest(_)));
    }

    #[test]
    fn provider_error_message_is_relayed() {
        let source = ApplicationError::Chat(ChatError::Provider("Invalid API Key".to_string()));
        let result: ApiError = source.into();
        let ApiError::Upstream(msg) = result else {
            unreachable!("Expected Upstream");
        };
        assert_eq!(msg, "Provider error: Invalid API Key");
    }

    #[test]
    fn speech_error_converts_to_upstream() {
        let source =
            ApplicationError::Speech(SpeechError::SynthesisFailed("Invalid voice".to_string()));
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::Upstream(_)));
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "something broke".to_string(),
        };
        let json = serde_json::to_string(&resp).expect("serialize");
        assert_eq!(json, r#"{"error":"something broke"}"#);
    }
}
