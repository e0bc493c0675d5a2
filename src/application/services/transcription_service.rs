use std::sync::Arc;

use crate::application::ports::{
    TranscodeError, Transcoder, TranscriptionEngine, TranscriptionError, Workspace, WorkspaceError,
};
use crate::application::services::{RetryPolicy, retry_with_backoff};
use crate::domain::{NormalizedAudio, TranscriptResult, UploadedAudio, partition};

/// The chunked-transcription pipeline: transcode the upload once, partition
/// the normalized audio into size-bounded chunks, transcribe each chunk in
/// index order with per-chunk retries, and aggregate the segments.
///
/// Chunks are processed sequentially so only one chunk buffer is in flight at
/// a time. A chunk that exhausts its retries aborts the rest of the pipeline;
/// no partial transcript is returned.
pub struct TranscriptionService<T, E>
where
    T: Transcoder,
    E: TranscriptionEngine,
{
    transcoder: Arc<T>,
    engine: Arc<E>,
    chunk_budget: usize,
    retry_policy: RetryPolicy,
}

impl<T, E> TranscriptionService<T, E>
where
    T: Transcoder,
    E: TranscriptionEngine,
{
    pub fn new(
        transcoder: Arc<T>,
        engine: Arc<E>,
        chunk_budget: usize,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            transcoder,
            engine,
            chunk_budget,
            retry_policy,
        }
    }

    pub async fn transcribe(
        &self,
        upload: UploadedAudio,
        workspace: &dyn Workspace,
    ) -> Result<TranscriptResult, PipelineError> {
        tracing::info!(
            filename = %upload.filename,
            mime_type = %upload.mime_type,
            bytes = upload.size_bytes(),
            "Received audio for transcription"
        );

        let normalized = NormalizedAudio::new(
            self.transcoder
                .transcode(&upload.data, workspace)
                .await
                .map_err(PipelineError::Transcode)?,
        );

        let chunks = partition(&normalized.data, self.chunk_budget);
        tracing::info!(
            normalized_bytes = normalized.len(),
            chunks = chunks.len(),
            "Audio normalized and partitioned"
        );

        let mut segments = Vec::with_capacity(chunks.len());

        for chunk in &chunks {
            workspace
                .stage(&format!("chunk-{}.mp3", chunk.index), &chunk.data)
                .await?;

            let segment = retry_with_backoff(self.retry_policy, || {
                self.engine.transcribe_chunk(&chunk.data, chunk.index)
            })
            .await
            .map_err(|source| {
                tracing::error!(
                    chunk_index = chunk.index,
                    error = %source,
                    "Chunk transcription failed after retries"
                );
                PipelineError::Transcription {
                    chunk_index: chunk.index,
                    source,
                }
            })?;

            tracing::debug!(
                chunk_index = chunk.index,
                chars = segment.text.len(),
                language = %segment.language,
                "Chunk transcribed"
            );
            segments.push(segment);
        }

        tracing::info!(segments = segments.len(), "Transcription completed");
        Ok(TranscriptResult::new(segments))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("transcoding: {0}")]
    Transcode(#[source] TranscodeError),
    #[error("transcribing chunk {chunk_index}: {source}")]
    Transcription {
        chunk_index: usize,
        #[source]
        source: TranscriptionError,
    },
    #[error("workspace: {0}")]
    Workspace(#[from] WorkspaceError),
}
