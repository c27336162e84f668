//! Image payload encoding
//!
//! Uploaded photos are carried to the provider as base64 inside a
//! data URI. The bytes are encoded once and never retained after the
//! outbound call.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encode raw image bytes to a base64 string
#[must_use]
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
