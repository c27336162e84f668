//! Application layer - prompt composition and operation services
//!
//! Each operation is a single linear pipeline with no intermediate
//! state: validate, compose the prompt, make one transport call,
//! normalize, respond. The persona texts live in [`prompts`] as named
//! constants; handlers never inline them.

pub mod error;
pub mod images;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use services::{ConciergeService, SpeechService};
