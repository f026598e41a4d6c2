use base64::Engine as _;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{self, GeneralPurpose, GeneralPurposeConfig};

/// Standard alphabet that tolerates non-canonical trailing bits.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error)]
#[error("invalid base64 payload: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);

/// Removes all whitespace and any data-URI prefix up to the last comma.
pub fn normalize_base64(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    match compact.rfind(',') {
        Some(idx) => compact[idx + 1..].to_string(),
        None => compact,
    }
}

/// Appends `=` until the length is a multiple of four.
pub fn pad_base64(mut encoded: String) -> String {
    let remainder = encoded.len() % 4;
    if remainder != 0 {
        encoded.extend(std::iter::repeat_n('=', 4 - remainder));
    }
    encoded
}

pub fn decode_base64_audio(raw: &str) -> Result<Vec<u8>, DecodeError> {
    let padded = pad_base64(normalize_base64(raw));
    Ok(LENIENT_STANDARD.decode(padded.as_bytes())?)
}

pub fn encode_base64_audio(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
