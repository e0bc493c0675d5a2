use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{Transcoder, TranscriptionEngine};
use crate::domain::{TranscriptSegment, UploadedAudio};
use crate::infrastructure::storage::RequestWorkspace;
use crate::presentation::state::AppState;

const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: Vec<TranscriptSegment>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// `POST /api/transcribe`: accepts a multipart form with a single `audio`
/// field and returns the chunked transcript. All temporary artifacts live in
/// a per-request workspace that is removed when this handler returns,
/// whatever the outcome.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<T, E>(
    State(state): State<AppState<T, E>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    T: Transcoder + 'static,
    E: TranscriptionEngine + 'static,
{
    let upload = match read_audio_field(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("Transcription request without an audio field");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No file provided")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Failed to read multipart: {}", e))),
            )
                .into_response();
        }
    };

    let workspace = match RequestWorkspace::create(&state.scratch_root) {
        Ok(ws) => ws,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create request workspace");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to process audio file".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response();
        }
    };

    // Workspace Drop removes every temp artifact on both arms below.
    match state.pipeline.transcribe(upload, &workspace).await {
        Ok(result) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                transcript: result.segments,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(request_id = %workspace.request_id(), error = %e, "Pipeline failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to process audio file".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}

async fn read_audio_field(
    multipart: &mut Multipart,
) -> Result<Option<UploadedAudio>, axum::extract::multipart::MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await?;

        tracing::debug!(
            filename = %filename,
            mime_type = %mime_type,
            bytes = data.len(),
            "Audio upload received"
        );

        return Ok(Some(UploadedAudio::new(data, mime_type, filename)));
    }

    Ok(None)
}
