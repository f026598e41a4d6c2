use std::sync::Arc;

use crate::application::ports::AudioTranscoder;
use crate::application::services::ConversionService;
use crate::presentation::config::DEFAULT_MAX_BODY_BYTES;

pub struct AppState<T>
where
    T: AudioTranscoder + ?Sized,
{
    pub conversion_service: Arc<ConversionService<T>>,
    pub expose_transcoder_errors: bool,
    pub max_body_bytes: usize,
}

impl<T> AppState<T>
where
    T: AudioTranscoder + ?Sized,
{
    pub fn new(conversion_service: Arc<ConversionService<T>>) -> Self {
        Self {
            conversion_service,
            expose_transcoder_errors: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl<T> Clone for AppState<T>
where
    T: AudioTranscoder + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            conversion_service: Arc::clone(&self.conversion_service),
            expose_transcoder_errors: self.expose_transcoder_errors,
            max_body_bytes: self.max_body_bytes,
        }
    }
}
