pub const MP3_MIME_TYPE: &str = "audio/mpeg";
pub const MP3_FILE_NAME: &str = "converted.mp3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub audio_base64: String,
    pub extension: Option<String>,
}

impl ConversionRequest {
    pub fn new(audio_base64: impl Into<String>, extension: Option<String>) -> Self {
        Self {
            audio_base64: audio_base64.into(),
            extension,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResponse {
    pub audio_mp3_base64: String,
    pub mime_type: &'static str,
    pub file_name: &'static str,
}

impl ConversionResponse {
    pub fn new(audio_mp3_base64: String) -> Self {
        Self {
            audio_mp3_base64,
            mime_type: MP3_MIME_TYPE,
            file_name: MP3_FILE_NAME,
        }
    }
}
