mod init_tracing;
mod request_id;
mod tool_output;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tool_output::sanitize_tool_output;
pub use tracing_config::{DEFAULT_LOG_DIRECTIVES, TracingConfig};
