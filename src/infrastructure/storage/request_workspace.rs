use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;
use uuid::Uuid;

use crate::application::ports::{Workspace, WorkspaceError};

/// Scratch directory scoped to one request. The directory name carries the
/// request id plus a random suffix, so concurrent requests never collide.
/// Dropping the workspace removes the directory and everything staged in it,
/// on every exit path.
pub struct RequestWorkspace {
    request_id: Uuid,
    dir: TempDir,
}

impl RequestWorkspace {
    pub fn create(scratch_root: &Path) -> Result<Self, WorkspaceError> {
        std::fs::create_dir_all(scratch_root).map_err(WorkspaceError::CreateFailed)?;

        let request_id = Uuid::new_v4();
        let dir = tempfile::Builder::new()
            .prefix(&format!("req-{}-", request_id))
            .tempdir_in(scratch_root)
            .map_err(WorkspaceError::CreateFailed)?;

        tracing::debug!(request_id = %request_id, dir = %dir.path().display(), "Workspace created");
        Ok(Self { request_id, dir })
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

#[async_trait]
impl Workspace for RequestWorkspace {
    fn dir(&self) -> &Path {
        self.dir.path()
    }

    async fn stage(&self, name: &str, data: &[u8]) -> Result<PathBuf, WorkspaceError> {
        let path = self.dir.path().join(name);
        tokio::fs::write(&path, data)
            .await
            .map_err(|source| WorkspaceError::StageFailed {
                name: name.to_string(),
                source,
            })?;
        Ok(path)
    }
}
