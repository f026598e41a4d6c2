mod ffmpeg_transcoder;

pub use ffmpeg_transcoder::{
    DEFAULT_FFMPEG_BINARY, DEFAULT_TRANSCODE_TIMEOUT, FfmpegTranscoder, check_ffmpeg_binary,
};
