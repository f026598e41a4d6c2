pub const DEFAULT_LOG_DIRECTIVES: &str = "info,mp3_bridge=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter used when `RUST_LOG` is unset.
    pub directives: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, directives: &str, json_format: bool) -> Self {
        let directives = match directives.trim() {
            "" => DEFAULT_LOG_DIRECTIVES.to_string(),
            custom => custom.to_string(),
        };

        Self {
            environment: environment.into(),
            json_format,
            directives,
        }
    }
}
