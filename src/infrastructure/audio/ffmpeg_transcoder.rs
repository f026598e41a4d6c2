use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioTranscoder, TranscodeError};
use crate::infrastructure::observability::sanitize_tool_output;

pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";
pub const DEFAULT_TRANSCODE_TIMEOUT: Duration = Duration::from_secs(120);

const MP3_CODEC: &str = "libmp3lame";
// VBR quality on LAME's 0-9 scale, lower is better.
const MP3_QUALITY: &str = "2";

/// Transcodes to MP3 by shelling out to an ffmpeg binary.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    binary: PathBuf,
    timeout: Duration,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn build_args(input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-y", "-loglevel", "error", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(input.as_os_str().to_owned());
        args.extend(
            ["-codec:a", MP3_CODEC, "-qscale:a", MP3_QUALITY]
                .into_iter()
                .map(OsString::from),
        );
        args.push(output.as_os_str().to_owned());
        args
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_BINARY, DEFAULT_TRANSCODE_TIMEOUT)
    }
}

#[async_trait]
impl AudioTranscoder for FfmpegTranscoder {
    #[tracing::instrument(
        skip(self, input, output),
        fields(binary = %self.binary.display(), input = %input.display())
    )]
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let child = Command::new(&self.binary)
            .args(Self::build_args(input, output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to spawn ffmpeg");
                TranscodeError::Spawn(e)
            })?;

        // Dropping the pending wait on timeout kills the child.
        let result = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(timeout_secs = self.timeout.as_secs_f64(), "ffmpeg timed out");
                return Err(TranscodeError::TimedOut(self.timeout));
            }
        };

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            tracing::warn!(
                code = ?result.status.code(),
                stderr = %sanitize_tool_output(&stderr),
                "ffmpeg exited with failure"
            );
            return Err(TranscodeError::Failed {
                code: result.status.code(),
                stderr,
            });
        }

        tracing::debug!("ffmpeg finished");
        Ok(())
    }
}

/// Runs `<binary> -version` and returns the first line of its banner.
pub async fn check_ffmpeg_binary(binary: &Path) -> Result<String, TranscodeError> {
    let output = Command::new(binary)
        .arg("-version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(TranscodeError::Spawn)?;

    if !output.status.success() {
        return Err(TranscodeError::Failed {
            code: output.status.code(),
            stderr: String::new(),
        });
    }

    let banner = String::from_utf8_lossy(&output.stdout);
    Ok(banner.lines().next().unwrap_or_default().trim().to_string())
}
