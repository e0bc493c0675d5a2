mod transcoder;
mod transcription_engine;
mod workspace;

pub use transcoder::{TranscodeError, Transcoder};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use workspace::{Workspace, WorkspaceError};
