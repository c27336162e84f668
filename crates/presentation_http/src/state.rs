//! Application state shared across handlers

use std::sync::Arc;

use application::{ConciergeService, SpeechService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Concierge service for photo, location and menu analysis
    pub concierge: Arc<ConciergeService>,
    /// Speech service for synthesis and transcription
    pub speech: Arc<SpeechService>,
}
