use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::audio::{DEFAULT_FFMPEG_BINARY, DEFAULT_TRANSCODE_TIMEOUT};
use crate::infrastructure::observability::DEFAULT_LOG_DIRECTIVES;

pub const ENV_PREFIX: &str = "APP";
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcoder: TranscoderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Upper bound on request bodies; base64 audio is roughly 4/3 of the raw size.
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscoderSettings {
    pub ffmpeg_path: PathBuf,
    pub timeout_secs: u64,
    /// Return ffmpeg's stderr to API clients on failure.
    pub expose_errors: bool,
    pub temp_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers `appsettings.<env>.*` (optional) and `APP_*` variables over
    /// the built-in defaults. Nested keys use `__`, e.g. `APP_SERVER__PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl TranscoderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TranscoderSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from(DEFAULT_FFMPEG_BINARY),
            timeout_secs: DEFAULT_TRANSCODE_TIMEOUT.as_secs(),
            expose_errors: true,
            temp_dir: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_DIRECTIVES.to_string(),
            enable_json: false,
        }
    }
}
