use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::application::ports::AudioTranscoder;
use crate::domain::{ConversionRequest, ConversionResponse};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub audio_base64: String,
    #[serde(default)]
    pub extension: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub audio_mp3_base64: String,
    pub mime_type: String,
    pub file_name: String,
}

impl From<ConvertRequest> for ConversionRequest {
    fn from(request: ConvertRequest) -> Self {
        ConversionRequest::new(request.audio_base64, request.extension)
    }
}

impl From<ConversionResponse> for ConvertResponse {
    fn from(response: ConversionResponse) -> Self {
        Self {
            audio_mp3_base64: response.audio_mp3_base64,
            mime_type: response.mime_type.to_string(),
            file_name: response.file_name.to_string(),
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn convert_handler<T>(
    State(state): State<AppState<T>>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError>
where
    T: AudioTranscoder + ?Sized + 'static,
{
    let request = ConversionRequest::from(request);

    match state.conversion_service.convert(&request).await {
        Ok(response) => Ok(Json(response.into())),
        Err(e) => {
            tracing::warn!(error = %e, "Conversion failed");
            Err(ApiError::from_conversion(e, state.expose_transcoder_errors))
        }
    }
}
