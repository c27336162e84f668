//! Speech service - synthesis and transcription
//!
//! Thin pass-through over the speech ports. Audio bytes and
//! transcription JSON are relayed untouched.

use std::sync::Arc;

use ai_speech::{AudioUpload, SpeechToText, TextToSpeech};
use bytes::Bytes;
use serde_json::Value;
use tracing::instrument;

use crate::error::ApplicationError;

/// Service for text-to-speech and speech-to-text
pub struct SpeechService {
    tts: Arc<dyn TextToSpeech>,
    stt: Arc<dyn SpeechToText>,
}

impl SpeechService {
    /// Create a new speech service
    #[must_use]
    pub fn new(tts: Arc<dyn TextToSpeech>, stt: Arc<dyn SpeechToText>) -> Self {
        Self { tts, stt }
    }

    /// Synthesize speech for the text, falling back to the provider's
    /// default voice when none is requested
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn narrate(&self, text: &str, voice: Option<&str>) -> Result<Bytes, ApplicationError> {
        let audio = self.tts.synthesize(text, voice).await?;
        Ok(audio)
    }

    /// Transcribe an uploaded audio clip
    #[instrument(skip(self, audio), fields(audio_bytes = audio.size_bytes()))]
    pub async fn transcribe(&self, audio: AudioUpload) -> Result<Value, ApplicationError> {
        let transcript = self.stt.transcribe(audio).await?;
        Ok(transcript)
    }
}
