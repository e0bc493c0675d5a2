use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::TranscriptSegment;

/// OpenAI Whisper-compatible transcription client. One call per chunk; the
/// overall request timeout lives on the HTTP client, so every retried
/// attempt gets a fresh window.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct VerboseTranscription {
    text: String,
    #[serde(default)]
    language: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe_chunk(
        &self,
        audio: &[u8],
        chunk_index: usize,
    ) -> Result<TranscriptSegment, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio.to_vec())
            .file_name(format!("chunk-{}.mp3", chunk_index))
            .mime_str("audio/mp3")
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            chunk_index,
            bytes = audio.len(),
            "Sending chunk to Whisper API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranscriptionError::Timeout(format!("chunk {}: {}", chunk_index, e))
                } else {
                    TranscriptionError::ApiRequestFailed(format!("request: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcription: VerboseTranscription = response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(format!("body: {}", e)))?;

        tracing::info!(
            chunk_index,
            chars = transcription.text.len(),
            language = %transcription.language,
            "Chunk transcription completed"
        );

        Ok(TranscriptSegment {
            text: transcription.text,
            language: transcription.language,
            timestamp: Utc::now(),
        })
    }
}
