use std::fmt;

pub const DEFAULT_EXTENSION: &str = "wav";
const MAX_EXTENSION_LEN: usize = 16;

/// File extension hint for the uploaded audio, safe to embed in a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioExtension(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid extension: {0:?}")]
pub struct InvalidExtension(pub String);

impl AudioExtension {
    /// Accepts 1 to 16 ASCII alphanumerics, with an optional leading dot.
    pub fn parse(raw: &str) -> Result<Self, InvalidExtension> {
        let candidate = raw.strip_prefix('.').unwrap_or(raw);

        let valid = !candidate.is_empty()
            && candidate.len() <= MAX_EXTENSION_LEN
            && candidate.chars().all(|c| c.is_ascii_alphanumeric());

        if valid {
            Ok(Self(candidate.to_string()))
        } else {
            Err(InvalidExtension(raw.to_string()))
        }
    }

    pub fn from_hint(hint: Option<&str>) -> Result<Self, InvalidExtension> {
        hint.map_or_else(|| Ok(Self::default()), Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn input_file_name(&self) -> String {
        format!("input.{}", self.0)
    }
}

impl Default for AudioExtension {
    fn default() -> Self {
        Self(DEFAULT_EXTENSION.to_string())
    }
}

impl fmt::Display for AudioExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
