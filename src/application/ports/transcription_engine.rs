use async_trait::async_trait;

use crate::domain::TranscriptSegment;

/// Remote speech-to-text capability for a single audio chunk.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe_chunk(
        &self,
        audio: &[u8],
        chunk_index: usize,
    ) -> Result<TranscriptSegment, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
