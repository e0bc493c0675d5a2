use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Request-scoped scratch space for temporary artifacts (the uploaded input,
/// the normalized output, and the per-chunk staging files). Implementations
/// must guarantee that everything staged here is removed when the workspace
/// is released, on success and on failure alike.
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Directory external tools can operate in.
    fn dir(&self) -> &Path;

    /// Write `data` under `name` inside the workspace and return its path.
    async fn stage(&self, name: &str, data: &[u8]) -> Result<PathBuf, WorkspaceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("failed to create workspace: {0}")]
    CreateFailed(#[source] io::Error),
    #[error("failed to stage {name}: {source}")]
    StageFailed {
        name: String,
        #[source]
        source: io::Error,
    },
}
