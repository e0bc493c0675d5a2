use std::path::PathBuf;
use std::time::Duration;

use crate::domain::DEFAULT_CHUNK_BYTES;
use crate::presentation::config::Environment;

/// Process configuration, resolved once at startup from environment
/// variables. Only the transcription credential is mandatory; everything else
/// carries a working default. Invalid values fail here, at startup, never
/// inside a request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub transcoding: TranscodingSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct TranscodingSettings {
    pub ffmpeg_path: PathBuf,
    pub sample_rate: u32,
    pub channels: u32,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub chunk_budget_bytes: usize,
    pub scratch_root: PathBuf,
    pub retry_max_attempts: u32,
    pub retry_initial_delay: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },
}

fn parsed_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, SettingsError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| SettingsError::InvalidVar {
            var,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| SettingsError::MissingVar("OPENAI_API_KEY"))?;

        let chunk_budget_bytes: usize = parsed_var("CHUNK_BUDGET_BYTES", DEFAULT_CHUNK_BYTES)?;
        if chunk_budget_bytes == 0 {
            return Err(SettingsError::InvalidVar {
                var: "CHUNK_BUDGET_BYTES",
                message: "chunk budget must be positive".to_string(),
            });
        }

        Ok(Self {
            environment: parsed_var("APP_ENVIRONMENT", Environment::Local)?,
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parsed_var("SERVER_PORT", 3001)?,
            },
            transcription: TranscriptionSettings {
                api_key,
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                model: std::env::var("WHISPER_MODEL").ok(),
                timeout: Duration::from_secs(parsed_var("TRANSCRIPTION_TIMEOUT_SECS", 120u64)?),
            },
            transcoding: TranscodingSettings {
                ffmpeg_path: std::env::var("FFMPEG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("ffmpeg")),
                sample_rate: 16_000,
                channels: 1,
            },
            pipeline: PipelineSettings {
                chunk_budget_bytes,
                scratch_root: std::env::var("SCRATCH_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| std::env::temp_dir().join("audioscribe")),
                retry_max_attempts: parsed_var("RETRY_MAX_ATTEMPTS", 3u32)?,
                retry_initial_delay: Duration::from_millis(parsed_var(
                    "RETRY_INITIAL_DELAY_MS",
                    1000u64,
                )?),
            },
        })
    }
}
