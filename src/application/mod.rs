//! Application layer services.
//!
//! - [`services::redirect_service::RedirectService`] - Short code lookup and
//!   expiration policy, shared by every host (HTTP, Lambda, CLI)

pub mod services;
