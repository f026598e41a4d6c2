use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use crate::application::ports::{AudioTranscoder, TranscodeError};
use crate::domain::{
    AudioExtension, ConversionRequest, ConversionResponse, InvalidExtension, decode_base64_audio,
    encode_base64_audio,
};

pub const OUTPUT_FILE_NAME: &str = "output.mp3";
const WORKSPACE_PREFIX: &str = "mp3-bridge-";

/// Runs one conversion end to end inside a request-scoped temp directory.
pub struct ConversionService<T>
where
    T: AudioTranscoder + ?Sized,
{
    transcoder: Arc<T>,
    temp_root: Option<PathBuf>,
}

impl<T> ConversionService<T>
where
    T: AudioTranscoder + ?Sized,
{
    pub fn new(transcoder: Arc<T>) -> Self {
        Self {
            transcoder,
            temp_root: None,
        }
    }

    /// Places workspaces under `root` instead of the system temp dir.
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            payload_chars = request.audio_base64.len(),
            extension = ?request.extension,
        )
    )]
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResponse, ConversionError> {
        let extension = AudioExtension::from_hint(request.extension.as_deref())?;

        let audio = decode_base64_audio(&request.audio_base64).map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed base64 payload");
            ConversionError::InvalidEncoding
        })?;

        tracing::debug!(bytes = audio.len(), %extension, "Payload decoded");

        let workspace = self.create_workspace().map_err(ConversionError::Workspace)?;
        let result = self.transcode_in(workspace.path(), &extension, &audio).await;
        release_workspace(workspace).await;
        let mp3 = result?;

        tracing::info!(
            input_bytes = audio.len(),
            output_bytes = mp3.len(),
            "Conversion complete"
        );

        Ok(ConversionResponse::new(encode_base64_audio(&mp3)))
    }

    async fn transcode_in(
        &self,
        workspace: &Path,
        extension: &AudioExtension,
        audio: &[u8],
    ) -> Result<Vec<u8>, ConversionError> {
        let input_path = workspace.join(extension.input_file_name());
        let output_path = workspace.join(OUTPUT_FILE_NAME);

        tokio::fs::write(&input_path, audio)
            .await
            .map_err(ConversionError::Workspace)?;

        self.transcoder.transcode(&input_path, &output_path).await?;

        tokio::fs::read(&output_path)
            .await
            .map_err(ConversionError::Workspace)
    }

    fn create_workspace(&self) -> io::Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKSPACE_PREFIX);

        match &self.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
    }
}

/// Removes the workspace on a blocking thread. If the request future is
/// dropped before this runs, `TempDir`'s `Drop` removes it instead.
async fn release_workspace(workspace: TempDir) {
    match tokio::task::spawn_blocking(move || workspace.close()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "Failed to remove conversion workspace"),
        Err(e) => tracing::warn!(error = %e, "Workspace cleanup task failed"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid base64 payload")]
    InvalidEncoding,
    #[error(transparent)]
    InvalidExtension(#[from] InvalidExtension),
    #[error("transcode: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("workspace: {0}")]
    Workspace(#[source] io::Error),
}
