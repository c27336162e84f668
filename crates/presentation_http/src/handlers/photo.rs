//! Photo analysis handler

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Photo analysis response body
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    /// The concierge's story about the photo
    pub story: String,
}

/// Handle a photo upload and return the concierge story
#[instrument(skip(state, multipart))]
pub async fn analyze_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PhotoResponse>, ApiError> {
    let mut image_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            image_bytes = Some(bytes);
        }
    }

    let Some(image_bytes) = image_bytes else {
        return Err(ApiError::BadRequest("photo file is required".to_string()));
    };
    if image_bytes.is_empty() {
        return Err(ApiError::BadRequest("photo file is empty".to_string()));
    }

    let story = state.concierge.photo_story(&image_bytes).await?;

    Ok(Json(PhotoResponse { story }))
}
