//! Shared application state for the HTTP host.

use std::sync::Arc;

use crate::application::services::RedirectService;

/// State injected into every axum handler.
///
/// Cloned per request; the service behind the `Arc` is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    pub fn new(redirect_service: Arc<RedirectService>) -> Self {
        Self { redirect_service }
    }
}
