//! HTTP error mapping for the conversion API.
//!
//! Client errors carry a fixed message. Server-side failures are logged with
//! full detail; only transcoder stderr may be returned, and only when
//! exposure is enabled.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::TranscodeError;
use crate::application::services::ConversionError;

pub const INVALID_BASE64_MESSAGE: &str = "Invalid Base-64";
pub const INVALID_EXTENSION_MESSAGE: &str = "Invalid extension";
pub const TRANSCODE_FAILED_MESSAGE: &str = "Transcoding failed";
pub const TRANSCODE_TIMEOUT_MESSAGE: &str = "Transcoding timed out";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("transcoder failed: {0}")]
    Transcoder(String),
    #[error("transcoder timed out")]
    Timeout,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn from_conversion(error: ConversionError, expose_transcoder_errors: bool) -> Self {
        match error {
            ConversionError::InvalidEncoding => Self::BadRequest(INVALID_BASE64_MESSAGE.into()),
            ConversionError::InvalidExtension(e) => {
                tracing::warn!(error = %e, "Rejected extension hint");
                Self::BadRequest(INVALID_EXTENSION_MESSAGE.into())
            }
            ConversionError::Transcode(TranscodeError::Failed { stderr, .. }) => {
                if expose_transcoder_errors {
                    Self::Transcoder(format!("FFmpeg error → {}", stderr))
                } else {
                    Self::Transcoder(TRANSCODE_FAILED_MESSAGE.into())
                }
            }
            ConversionError::Transcode(TranscodeError::TimedOut(_)) => Self::Timeout,
            other => Self::Internal(other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Transcoder(_) | Self::Timeout | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::BadRequest(message) | Self::Transcoder(message) => message,
            Self::Timeout => TRANSCODE_TIMEOUT_MESSAGE.to_string(),
            Self::Internal(cause) => {
                tracing::error!(error = %cause, "Unhandled conversion failure");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
