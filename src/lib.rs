//! # URL Redirector
//!
//! Resolves short codes to their original URLs. Records live in an object store
//! as `<code>.json` documents of the form
//! `{"originalURL": "...", "expirationTime": <unix seconds>}`; a request for
//! `/<code>` is answered with `302 Found` or, once the record has expired,
//! `410 Gone`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Record model, short codes, storage contract
//! - **Application Layer** ([`application`]) - The redirect handler
//! - **Infrastructure Layer** ([`infrastructure`]) - S3 and filesystem stores
//! - **API Layer** ([`api`]) - axum handlers and middleware
//!
//! ## Hosts
//!
//! - `url-redirector` - HTTP server (axum)
//! - `lambda` - AWS Lambda function (lambda_http)
//! - `redirect-cli` - Operator tool for resolving paths from a terminal
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod lambda;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use error::RedirectError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::RedirectService;
    pub use crate::domain::entities::{InvocationRequest, InvocationResponse, UrlRecord};
    pub use crate::domain::repositories::{ObjectStore, StorageError};
    pub use crate::domain::{Clock, ShortCode, SystemClock};
    pub use crate::error::RedirectError;
    pub use crate::state::AppState;
}
