use std::path::PathBuf;

use audioscribe::application::ports::{TranscodeError, Transcoder, Workspace};
use audioscribe::infrastructure::audio::FfmpegTranscoder;
use audioscribe::infrastructure::storage::RequestWorkspace;

fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn ffmpeg_available() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn transcoder() -> FfmpegTranscoder {
    FfmpegTranscoder::new(PathBuf::from("ffmpeg"), 16_000, 1)
}

fn workspace() -> (tempfile::TempDir, RequestWorkspace) {
    let root = tempfile::tempdir().expect("scratch root");
    let ws = RequestWorkspace::create(root.path()).expect("workspace");
    (root, ws)
}

#[tokio::test]
async fn given_wav_input_when_transcoding_then_produces_nonempty_mp3_bytes() {
    if !ffmpeg_available() {
        return;
    }

    let samples: Vec<i16> = (0..16_000).map(|i| ((i % 200) * 100) as i16).collect();
    let wav = build_wav(16_000, &samples);
    let (_root, ws) = workspace();

    let result = transcoder().transcode(&wav, &ws).await.expect("transcode");

    assert!(!result.is_empty());
    // MP3 streams start with an ID3 tag or a frame sync.
    assert!(result.starts_with(b"ID3") || result[0] == 0xFF);
}

#[tokio::test]
async fn given_wav_at_44100hz_when_transcoding_then_resamples_and_succeeds() {
    if !ffmpeg_available() {
        return;
    }

    let samples: Vec<i16> = vec![0i16; 44_100];
    let wav = build_wav(44_100, &samples);
    let (_root, ws) = workspace();

    let result = transcoder().transcode(&wav, &ws).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_garbage_input_when_transcoding_then_returns_tool_failed() {
    if !ffmpeg_available() {
        return;
    }

    let (_root, ws) = workspace();

    let result = transcoder().transcode(b"definitely not audio", &ws).await;

    assert!(matches!(result, Err(TranscodeError::ToolFailed { .. })));
}

#[tokio::test]
async fn given_missing_binary_when_transcoding_then_returns_tool_unavailable() {
    let missing = FfmpegTranscoder::new(PathBuf::from("/nonexistent/ffmpeg-binary"), 16_000, 1);
    let (_root, ws) = workspace();

    let result = missing.transcode(b"anything", &ws).await;

    assert!(matches!(result, Err(TranscodeError::ToolUnavailable { .. })));
}

#[tokio::test]
async fn given_successful_transcode_when_done_then_staged_files_remain_for_caller_cleanup() {
    if !ffmpeg_available() {
        return;
    }

    let wav = build_wav(16_000, &vec![0i16; 1600]);
    let (_root, ws) = workspace();

    transcoder().transcode(&wav, &ws).await.expect("transcode");

    // The adapter stages but never deletes; the workspace owns cleanup.
    assert!(ws.dir().join("upload-input").exists());
    assert!(ws.dir().join("normalized.mp3").exists());
}
