mod retry;
mod transcription_service;

pub use retry::{RetryPolicy, retry_with_backoff};
pub use transcription_service::{PipelineError, TranscriptionService};
