//! HTTP layer for the axum host.
//!
//! Translates HTTP requests into redirect-handler invocations and handler
//! results back into HTTP responses.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies for auxiliary endpoints
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
