//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`   - Storage health check
//! - `GET /`         - Redirect with an empty code (always `400`)
//! - `GET /{*path}`  - Short link redirect; every `/` in the path is dropped
//!   to form the code
//!
//! A short code named `health` is shadowed by the health endpoint.

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/", get(redirect_handler))
        .route("/{*path}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
