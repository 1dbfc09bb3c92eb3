pub mod health;
pub mod home;
pub mod openapi;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::health_handler))
        .route("/openapi.json", get(openapi::openapi_spec))
        .route("/docs", get(openapi::docs_handler))
        .route("/parse-resume/", post(handlers::handle_parse_resume))
        .route("/parse-resume", post(handlers::handle_parse_resume))
        .layer(upload_limit)
        .with_state(state)
}
