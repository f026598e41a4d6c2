mod convert;
mod health;

pub use convert::{ConvertRequest, ConvertResponse, convert_handler};
pub use health::{HealthResponse, health_handler};
