use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;

use crate::application::ports::{TranscodeError, Transcoder, Workspace};

const INPUT_NAME: &str = "upload-input";
const OUTPUT_NAME: &str = "normalized.mp3";

/// Normalizes audio by shelling out to ffmpeg. The binary path is injected at
/// construction so deployments can point at their own install.
pub struct FfmpegTranscoder {
    ffmpeg_path: PathBuf,
    sample_rate: u32,
    channels: u32,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg_path: PathBuf, sample_rate: u32, channels: u32) -> Self {
        Self {
            ffmpeg_path,
            sample_rate,
            channels,
        }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(
        &self,
        input: &[u8],
        workspace: &dyn Workspace,
    ) -> Result<Bytes, TranscodeError> {
        let input_path = workspace.stage(INPUT_NAME, input).await?;
        let output_path = workspace.dir().join(OUTPUT_NAME);

        tracing::debug!(
            ffmpeg = %self.ffmpeg_path.display(),
            input = %input_path.display(),
            "Transcoding upload to mono 16 kHz MP3"
        );

        let output = Command::new(&self.ffmpeg_path)
            .arg("-y")
            .arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(&input_path)
            .arg("-ac")
            .arg(self.channels.to_string())
            .arg("-ar")
            .arg(self.sample_rate.to_string())
            .arg("-f")
            .arg("mp3")
            .arg(&output_path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| TranscodeError::ToolUnavailable {
                tool: self.ffmpeg_path.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!(status = %output.status, stderr = %stderr, "ffmpeg failed");
            return Err(TranscodeError::ToolFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        let normalized = tokio::fs::read(&output_path)
            .await
            .map_err(TranscodeError::OutputRead)?;

        tracing::debug!(bytes = normalized.len(), "Transcoding completed");
        Ok(Bytes::from(normalized))
    }
}
