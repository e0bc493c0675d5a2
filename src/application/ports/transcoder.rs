use async_trait::async_trait;
use bytes::Bytes;

use super::{Workspace, WorkspaceError};

/// Normalizes arbitrary input audio into the canonical format (mono, 16 kHz,
/// MP3). Implementations stage their input and output files inside the given
/// workspace but never delete them; the workspace owns cleanup.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(
        &self,
        input: &[u8],
        workspace: &dyn Workspace,
    ) -> Result<Bytes, TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("workspace: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("failed to invoke {tool}: {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("transcoder exited with {status}: {stderr}")]
    ToolFailed { status: String, stderr: String },
    #[error("failed to read transcoded output: {0}")]
    OutputRead(#[source] std::io::Error),
}
