mod audio_extension;
mod conversion;
mod encoded_audio;

pub use audio_extension::{AudioExtension, DEFAULT_EXTENSION, InvalidExtension};
pub use conversion::{ConversionRequest, ConversionResponse, MP3_FILE_NAME, MP3_MIME_TYPE};
pub use encoded_audio::{
    DecodeError, decode_base64_audio, encode_base64_audio, normalize_base64, pad_base64,
};
