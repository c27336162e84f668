//! Location narration handler

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use domain::GeoLocation;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Client-provided audio path for the narration.
///
/// Synthesis happens through a separate `/tts` call; this tells the
/// client where to get it.
const AUDIO_URL: &str = "/tts/stream";

/// Location narration request body
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationRequest {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Location narration response body
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    /// The coordinates echoed back
    pub location: LocationEcho,
    /// The guide's narration script
    pub guide_text: String,
    /// Where the client can fetch the audio rendition
    pub audio_url: String,
}

/// Echo of the requested coordinates
#[derive(Debug, Serialize)]
pub struct LocationEcho {
    pub lat: f64,
    pub lon: f64,
}

/// Handle a location narration request.
///
/// Body deserialization failures are folded into the uniform error
/// shape rather than surfacing as a bare extractor rejection.
#[instrument(skip(state, request))]
pub async fn analyze_location(
    State(state): State<AppState>,
    request: Result<Json<LocationRequest>, JsonRejection>,
) -> Result<Json<LocationResponse>, ApiError> {
    let Json(request) = request.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let location = GeoLocation::new(request.latitude, request.longitude);
    let guide_text = state.concierge.location_guide(location).await?;

    Ok(Json(LocationResponse {
        location: LocationEcho {
            lat: request.latitude,
            lon: request.longitude,
        },
        guide_text,
        audio_url: AUDIO_URL.to_string(),
    }))
}
