//! Audio types

/// An uploaded audio clip destined for transcription.
///
/// Carries the raw bytes together with the filename and MIME type the
/// client supplied; both are forwarded in the multipart form.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    data: Vec<u8>,
    filename: String,
    mime_type: String,
}

impl AudioUpload {
    /// Create a new audio upload
    pub fn new(data: Vec<u8>, filename: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Size of the audio payload in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Filename supplied by the client
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// MIME type supplied by the client
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Consume the upload, returning the raw bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
