//! Application services

pub mod concierge_service;
pub mod speech_service;

pub use concierge_service::ConciergeService;
pub use speech_service::SpeechService;
