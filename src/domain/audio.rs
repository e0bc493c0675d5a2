use bytes::Bytes;

/// An uploaded audio file as received from the client, before any processing.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub data: Bytes,
    pub mime_type: String,
    pub filename: String,
}

impl UploadedAudio {
    pub fn new(data: Bytes, mime_type: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
            filename: filename.into(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// Transcoded audio in the canonical format expected by the transcription
/// service: mono, 16 kHz, MP3.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAudio {
    pub data: Bytes,
}

impl NormalizedAudio {
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
