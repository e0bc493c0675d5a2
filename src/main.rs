use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use audioscribe::application::services::{RetryPolicy, TranscriptionService};
use audioscribe::infrastructure::audio::{FfmpegTranscoder, OpenAiWhisperEngine};
use audioscribe::infrastructure::observability::{TracingConfig, init_tracing};
use audioscribe::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let tracing_defaults = TracingConfig::default();
    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: tracing_defaults.json_format || settings.environment.is_prod(),
        },
        settings.server.port,
    );

    let transcoder = Arc::new(FfmpegTranscoder::new(
        settings.transcoding.ffmpeg_path.clone(),
        settings.transcoding.sample_rate,
        settings.transcoding.channels,
    ));

    let engine = Arc::new(OpenAiWhisperEngine::new(
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
        settings.transcription.model.clone(),
        settings.transcription.timeout,
    )?);

    let pipeline = Arc::new(TranscriptionService::new(
        transcoder,
        engine,
        settings.pipeline.chunk_budget_bytes,
        RetryPolicy {
            max_attempts: settings.pipeline.retry_max_attempts,
            initial_delay: settings.pipeline.retry_initial_delay,
            max_delay: Some(Duration::from_secs(30)),
        },
    ));

    let state = AppState {
        pipeline,
        scratch_root: settings.pipeline.scratch_root.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
