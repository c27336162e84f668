//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Maximum accepted upload size (photos and audio clips)
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::health::liveness))
        // Concierge API
        .route("/analyze-photo", post(handlers::photo::analyze_photo))
        .route(
            "/analyze-location",
            post(handlers::location::analyze_location),
        )
        .route("/generate-menu", post(handlers::menu::generate_menu))
        // Speech API
        .route("/tts", post(handlers::speech::synthesize))
        .route("/transcribe", post(handlers::speech::transcribe))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Attach state
        .with_state(state)
}
