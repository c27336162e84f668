//! Speech synthesis and transcription handlers

use ai_speech::AudioUpload;
use axum::{
    Form, Json,
    extract::{Multipart, State, rejection::FormRejection},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Speech synthesis request body
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    /// Text to synthesize
    pub text: String,
    /// Voice override; the provider default is used when absent
    #[serde(default)]
    pub voice: Option<String>,
}

/// Handle a speech synthesis request, returning raw MP3 bytes.
///
/// Form deserialization failures are folded into the uniform error
/// shape rather than surfacing as a bare extractor rejection.
#[instrument(skip(state, request))]
pub async fn synthesize(
    State(state): State<AppState>,
    request: Result<Form<TtsRequest>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Form(request) = request.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text is required".to_string()));
    }

    let audio = state
        .speech
        .narrate(&request.text, request.voice.as_deref())
        .await?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio))
}

/// Handle an audio transcription request.
///
/// The provider's JSON response is relayed unchanged.
#[instrument(skip(state, multipart))]
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .unwrap_or("audio.wav")
                .to_string();
            let mime_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            upload = Some(AudioUpload::new(bytes.to_vec(), filename, mime_type));
        }
    }

    let Some(upload) = upload else {
        return Err(ApiError::BadRequest("audio file is required".to_string()));
    };
    if upload.is_empty() {
        return Err(ApiError::BadRequest("audio file is empty".to_string()));
    }

    let transcript = state.speech.transcribe(upload).await?;

    Ok(Json(transcript))
}
