//! OpenAI chat-completions adapter

mod client;

pub use client::OpenAiChatClient;
