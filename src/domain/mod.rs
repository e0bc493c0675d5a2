mod audio;
mod chunk;
mod transcript;

pub use audio::{NormalizedAudio, UploadedAudio};
pub use chunk::{AudioChunk, DEFAULT_CHUNK_BYTES, partition};
pub use transcript::{TranscriptResult, TranscriptSegment};
