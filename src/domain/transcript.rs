use chrono::{DateTime, Utc};
use serde::Serialize;

/// Text and detected language for one transcribed chunk. The timestamp is
/// stamped by the client adapter when the remote response arrives, not taken
/// from the response itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub language: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The full transcript: one segment per chunk, in chunk order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TranscriptResult {
    pub segments: Vec<TranscriptSegment>,
}

impl TranscriptResult {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
