pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings};
pub use error::ApiError;
pub use router::{CONVERT_PATH, HEALTH_PATH, create_router};
pub use state::AppState;
