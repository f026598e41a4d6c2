use mp3_bridge::domain::{decode_base64_audio, encode_base64_audio, normalize_base64, pad_base64};

#[test]
fn given_data_uri_when_normalizing_then_keeps_segment_after_last_comma() {
    assert_eq!(normalize_base64("data:audio/wav;base64,AAAA"), "AAAA");
}

#[test]
fn given_multiple_commas_when_normalizing_then_uses_last_one() {
    assert_eq!(normalize_base64("a,b,QUJD"), "QUJD");
}

#[test]
fn given_line_wrapped_payload_when_normalizing_then_strips_whitespace() {
    assert_eq!(normalize_base64("  QUJD\r\nREVG\tR0hJ \n"), "QUJDREVGR0hJ");
}

#[test]
fn given_unpadded_input_when_padding_then_length_is_multiple_of_four() {
    for len in 0..=13 {
        let padded = pad_base64("A".repeat(len));
        assert_eq!(padded.len() % 4, 0, "length {len} was not padded");
        assert!(padded.starts_with(&"A".repeat(len)));
    }
}

#[test]
fn given_padded_input_when_padding_again_then_is_unchanged() {
    for input in ["", "QQ", "QUI", "QUJD", "QUJDRA"] {
        let once = pad_base64(input.to_string());
        let twice = pad_base64(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn given_missing_padding_when_decoding_then_succeeds() {
    assert_eq!(decode_base64_audio("QUI").unwrap(), b"AB");
    assert_eq!(decode_base64_audio("QQ").unwrap(), b"A");
}

#[test]
fn given_wrapped_payload_when_decoding_then_matches_unwrapped_payload() {
    let wrapped = decode_base64_audio("QUJD\nREVG\n R0hJ").unwrap();
    let unwrapped = decode_base64_audio("QUJDREVGR0hJ").unwrap();

    assert_eq!(wrapped, unwrapped);
    assert_eq!(wrapped, b"ABCDEFGHI");
}

#[test]
fn given_data_uri_payload_when_decoding_then_prefix_is_ignored() {
    let decoded = decode_base64_audio("data:audio/wav;base64,QUJD").unwrap();
    assert_eq!(decoded, b"ABC");
}

#[test]
fn given_non_canonical_trailing_bits_when_decoding_then_succeeds() {
    assert_eq!(decode_base64_audio("QUJ").unwrap(), b"AB");
}

#[test]
fn given_invalid_characters_when_decoding_then_returns_error() {
    assert!(decode_base64_audio("not-base64!!").is_err());
    assert!(decode_base64_audio("QUJD@").is_err());
}

#[test]
fn given_impossible_length_when_decoding_then_returns_error() {
    assert!(decode_base64_audio("AAAAA").is_err());
}

#[test]
fn given_empty_payload_when_decoding_then_returns_no_bytes() {
    assert!(decode_base64_audio("").unwrap().is_empty());
    assert!(decode_base64_audio("data:audio/wav;base64,").unwrap().is_empty());
}

#[test]
fn given_binary_audio_when_decoding_then_reencoding_then_matches_normalized_input() {
    let audio: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let encoded = encode_base64_audio(&audio);
    let wrapped = encoded
        .as_bytes()
        .chunks(76)
        .map(|line| std::str::from_utf8(line).unwrap())
        .collect::<Vec<_>>()
        .join("\n");

    let decoded = decode_base64_audio(&wrapped).unwrap();

    assert_eq!(decoded, audio);
    assert_eq!(encode_base64_audio(&decoded), pad_base64(normalize_base64(&wrapped)));
}
