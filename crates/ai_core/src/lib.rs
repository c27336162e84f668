//! AI Core - chat-completion transport and response normalization
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. The wire
//! types cover multi-part user content (text plus data-URI images) as
//! required by vision models.
//!
//! # Architecture
//!
//! - `ports` defines the `ChatModel` trait (port)
//! - `openai` contains the reqwest-based adapter
//! - `response` normalizes the provider body into a tagged
//!   [`CompletionOutcome`] so callers can never mistake an error body
//!   for generated content

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;
pub mod response;
pub mod types;

pub use config::ChatConfig;
pub use error::ChatError;
pub use openai::OpenAiChatClient;
pub use ports::ChatModel;
pub use response::CompletionOutcome;
pub use types::{ChatMessage, ChatRequest, ContentPart, ImageUrl, MessageContent};
