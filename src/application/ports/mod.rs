mod audio_transcoder;

pub use audio_transcoder::{AudioTranscoder, TranscodeError};
