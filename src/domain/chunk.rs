use bytes::Bytes;

/// Upper bound on a single transcription request payload.
pub const DEFAULT_CHUNK_BYTES: usize = 25 * 1024 * 1024;

/// A contiguous slice of the normalized audio, small enough to send to the
/// transcription service in one request.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioChunk {
    pub index: usize,
    pub data: Bytes,
}

impl AudioChunk {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Split `data` into ordered chunks of at most `budget` bytes.
///
/// Chunk `i` covers the byte range `[i*budget, min((i+1)*budget, len))`, so
/// chunks are contiguous, non-overlapping, and concatenate back to `data`
/// exactly. An empty buffer yields no chunks. The slices share the input
/// buffer; no bytes are copied.
pub fn partition(data: &Bytes, budget: usize) -> Vec<AudioChunk> {
    assert!(budget > 0, "chunk budget must be positive");

    let len = data.len();
    let count = len.div_ceil(budget);
    let mut chunks = Vec::with_capacity(count);

    for index in 0..count {
        let start = index * budget;
        let end = usize::min(start + budget, len);
        chunks.push(AudioChunk {
            index,
            data: data.slice(start..end),
        });
    }

    chunks
}
