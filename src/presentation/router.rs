use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::AudioTranscoder;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{convert_handler, health_handler};
use crate::presentation::state::AppState;

pub const CONVERT_PATH: &str = "/to-mp3";
pub const HEALTH_PATH: &str = "/health";

pub fn create_router<T>(state: AppState<T>) -> Router
where
    T: AudioTranscoder + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .route(CONVERT_PATH, post(convert_handler::<T>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
