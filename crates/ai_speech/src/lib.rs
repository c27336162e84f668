//! AI Speech - Text-to-Speech and Speech-to-Text transport
//!
//! Provides traits and the OpenAI implementation for speech
//! processing:
//! - `TextToSpeech` - synthesize MP3 audio from text
//! - `SpeechToText` - transcribe audio, passing the provider JSON
//!   through unmodified
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains the concrete implementation

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::openai::OpenAiSpeechProvider;
pub use types::AudioUpload;
