//! OpenAI speech provider
//!
//! Implements `TextToSpeech` using the OpenAI TTS endpoint and
//! `SpeechToText` using Whisper. Synthesis success is defined purely
//! by HTTP 200; the audio bytes are passed through untouched.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{SpeechToText, TextToSpeech};
use crate::types::AudioUpload;

/// OpenAI speech provider implementing both TTS and STT
#[derive(Debug, Clone)]
pub struct OpenAiSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl OpenAiSpeechProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn tts_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url)
    }

    fn stt_url(&self) -> String {
        format!("{}/audio/transcriptions", self.config.base_url)
    }
}

/// TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
}

/// Provider error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[async_trait]
impl TextToSpeech for OpenAiSpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Bytes, SpeechError> {
        let voice = voice.unwrap_or(&self.config.default_voice);

        let request = TtsRequest {
            model: &self.config.tts_model,
            input: text,
            voice,
        };

        debug!(voice, "Synthesizing speech");

        let response = self
            .client
            .post(self.tts_url())
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| SpeechError::from_transport(&e, self.config.timeout_ms))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Synthesis request failed");

            // Relay the provider's own message when the body carries one.
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&body) {
                return Err(SpeechError::SynthesisFailed(api_error.error.message));
            }
            return Err(SpeechError::SynthesisFailed(format!("HTTP {status}")));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        debug!(audio_size = audio.len(), "Speech synthesis complete");

        Ok(audio)
    }

    fn default_voice(&self) -> &str {
        &self.config.default_voice
    }
}

#[async_trait]
impl SpeechToText for OpenAiSpeechProvider {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes()))]
    async fn transcribe(&self, audio: AudioUpload) -> Result<Value, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        let filename = audio.filename().to_string();
        let mime_type = audio.mime_type().to_string();
        let data = audio.into_data();

        let file_part = Part::bytes(data)
            .file_name(filename)
            .mime_str(&mime_type)
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.stt_model.clone());

        debug!("Transcribing audio");

        let response = self
            .client
            .post(self.stt_url())
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechError::from_transport(&e, self.config.timeout_ms))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("HTTP {status}: {e}")))?;

        // The provider's JSON is the contract; pass it through as-is.
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(mock_server: &MockServer) -> OpenAiSpeechProvider {
        let config = SpeechConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: mock_server.uri(),
            ..Default::default()
        };
        OpenAiSpeechProvider::new(config).unwrap()
    }

    mod tts_tests {
        use super::*;

        #[tokio::test]
        async fn synthesize_passes_audio_bytes_through() {
            let mock_server = MockServer::start().await;
            let audio_bytes = vec![0u8; 1024];

            Mock::given(method("POST"))
                .and(path("/audio/speech"))
                .and(header("authorization", "Bearer test-api-key"))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(audio_bytes.clone()))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = create_test_provider(&mock_server);
            let result = provider.synthesize("hello", None).await.unwrap();

            assert_eq!(result.as_ref(), audio_bytes.as_slice());
        }

        #[tokio::test]
        async fn synthesize_defaults_voice_to_alloy() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/speech"))
                .and(body_partial_json(serde_json::json!({
                    "model": "tts-1",
                    "input": "hello",
                    "voice": "alloy"
                })))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 16]))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = create_test_provider(&mock_server);
            provider.synthesize("hello", None).await.unwrap();
        }

        #[tokio::test]
        async fn synthesize_honours_requested_voice() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/speech"))
                .and(body_partial_json(serde_json::json!({"voice": "nova"})))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 16]))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = create_test_provider(&mock_server);
            provider.synthesize("hello", Some("nova")).await.unwrap();
        }

        #[tokio::test]
        async fn non_200_status_is_synthesis_failure() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/speech"))
                .respond_with(ResponseTemplate::new(500))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = create_test_provider(&mock_server);
            let result = provider.synthesize("hello", None).await;

            assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
        }

        #[tokio::test]
        async fn provider_error_message_is_relayed() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/speech"))
                .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                    "error": {"message": "Invalid voice"}
                })))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = create_test_provider(&mock_server);
            let result = provider.synthesize("hello", None).await;

            let Err(SpeechError::SynthesisFailed(message)) = result else {
                unreachable!("expected SynthesisFailed");
            };
            assert_eq!(message, "Invalid voice");
        }

        #[tokio::test]
        async fn timeout_error_reports_configured_deadline() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/speech"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_delay(Duration::from_millis(500))
                        .set_body_bytes(vec![0u8; 16]),
                )
                .mount(&mock_server)
                .await;

            let config = SpeechConfig {
                api_key: Some("test-api-key".to_string()),
                base_url: mock_server.uri(),
                timeout_ms: 50,
                ..Default::default()
            };
            let provider = OpenAiSpeechProvider::new(config).unwrap();
            let result = provider.synthesize("hello", None).await;

            assert!(matches!(result, Err(SpeechError::Timeout(50))));
        }

        #[tokio::test]
        async fn empty_text_is_forwarded_to_provider() {
            // Local validation is the handler's job; the transport
            // forwards whatever it is given and relays the outcome.
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/speech"))
                .and(body_partial_json(serde_json::json!({"input": ""})))
                .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                    "error": {"message": "input is empty"}
                })))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = create_test_provider(&mock_server);
            let result = provider.synthesize("", None).await;

            assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
        }
    }

    mod stt_tests {
        use super::*;

        #[tokio::test]
        async fn transcribe_passes_provider_json_through() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/transcriptions"))
                .and(header("authorization", "Bearer test-api-key"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "text": "hello world",
                    "language": "en"
                })))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = create_test_provider(&mock_server);
            let upload = AudioUpload::new(vec![1, 2, 3], "clip.wav", "audio/wav");
            let result = provider.transcribe(upload).await.unwrap();

            assert_eq!(result["text"], "hello world");
            assert_eq!(result["language"], "en");
        }

        #[tokio::test]
        async fn transcribe_rejects_empty_audio() {
            let mock_server = MockServer::start().await;
            let provider = create_test_provider(&mock_server);
            let upload = AudioUpload::new(vec![], "clip.wav", "audio/wav");

            let result = provider.transcribe(upload).await;

            assert!(matches!(result, Err(SpeechError::InvalidAudio(_))));
        }

        #[tokio::test]
        async fn transcribe_error_body_is_passed_through() {
            // Transcription is a pure pass-through: even an error body
            // reaches the caller unmodified.
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/transcriptions"))
                .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                    "error": {"message": "Unsupported file format"}
                })))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = create_test_provider(&mock_server);
            let upload = AudioUpload::new(vec![1, 2, 3], "clip.xyz", "audio/xyz");
            let result = provider.transcribe(upload).await.unwrap();

            assert_eq!(result["error"]["message"], "Unsupported file format");
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn new_fails_without_api_key() {
            let result = OpenAiSpeechProvider::new(SpeechConfig::default());
            assert!(matches!(result, Err(SpeechError::Configuration(_))));
        }

        #[test]
        fn default_voice_is_alloy() {
            let provider = OpenAiSpeechProvider::new(SpeechConfig::test()).unwrap();
            assert_eq!(provider.default_voice(), "alloy");
        }
    }
}
