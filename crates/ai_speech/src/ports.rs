//! Port definitions for speech processing

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::error::SpeechError;
use crate::types::AudioUpload;

/// Port for text-to-speech implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech for the text.
    ///
    /// Returns the raw audio bytes exactly as the provider produced
    /// them. `voice` falls back to the configured default when absent.
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Bytes, SpeechError>;

    /// The default voice used when none is requested
    fn default_voice(&self) -> &str;
}

/// Port for speech-to-text implementations
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe the audio clip.
    ///
    /// The provider's JSON response is passed through unmodified.
    async fn transcribe(&self, audio: AudioUpload) -> Result<Value, SpeechError>;
}
