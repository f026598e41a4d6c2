use std::io;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

/// Converts the audio file at `input` into an MP3 written to `output`.
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("failed to launch transcoder: {0}")]
    Spawn(#[source] io::Error),
    #[error("transcoder exited with code {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },
    #[error("transcoder timed out after {0:?}")]
    TimedOut(Duration),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
