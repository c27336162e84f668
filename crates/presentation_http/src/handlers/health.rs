//! Liveness handler

use axum::Json;
use serde::{Deserialize, Serialize};

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
    pub message: String,
}

/// Liveness check - is the server running?
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
        message: "AI Local Concierge Brain is Online 🧠".to_string(),
    })
}
