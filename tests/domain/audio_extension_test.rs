use mp3_bridge::domain::{AudioExtension, DEFAULT_EXTENSION, InvalidExtension};

#[test]
fn given_no_hint_when_resolving_then_defaults_to_wav() {
    let extension = AudioExtension::from_hint(None).unwrap();
    assert_eq!(extension.as_str(), DEFAULT_EXTENSION);
    assert_eq!(extension.as_str(), "wav");
}

#[test]
fn given_plain_extension_when_parsing_then_accepts_it() {
    let extension = AudioExtension::parse("ogg").unwrap();
    assert_eq!(extension.as_str(), "ogg");
    assert_eq!(extension.input_file_name(), "input.ogg");
}

#[test]
fn given_leading_dot_when_parsing_then_dot_is_dropped() {
    assert_eq!(AudioExtension::parse(".m4a").unwrap().as_str(), "m4a");
}

#[test]
fn given_path_separators_when_parsing_then_rejects() {
    for raw in ["../wav", "a/b", "a\\b", "/etc/passwd"] {
        assert_eq!(
            AudioExtension::parse(raw),
            Err(InvalidExtension(raw.to_string())),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn given_empty_or_oversized_extension_when_parsing_then_rejects() {
    assert!(AudioExtension::parse("").is_err());
    assert!(AudioExtension::parse(".").is_err());
    assert!(AudioExtension::parse(&"a".repeat(17)).is_err());
    assert!(AudioExtension::parse(&"a".repeat(16)).is_ok());
}

#[test]
fn given_whitespace_or_punctuation_when_parsing_then_rejects() {
    assert!(AudioExtension::parse("wav ").is_err());
    assert!(AudioExtension::parse("w;av").is_err());
    assert!(AudioExtension::parse("tar.gz").is_err());
}

#[test]
fn given_extension_when_displayed_then_matches_as_str() {
    let extension = AudioExtension::parse("flac").unwrap();
    assert_eq!(format!("{}", extension), extension.as_str());
}
