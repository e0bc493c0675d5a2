use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{Transcoder, TranscriptionEngine};
use crate::application::services::TranscriptionService;

pub struct AppState<T, E>
where
    T: Transcoder,
    E: TranscriptionEngine,
{
    pub pipeline: Arc<TranscriptionService<T, E>>,
    pub scratch_root: PathBuf,
}

impl<T, E> Clone for AppState<T, E>
where
    T: Transcoder,
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            scratch_root: self.scratch_root.clone(),
        }
    }
}
