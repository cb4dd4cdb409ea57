//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored short-link target and its expiry
//! - [`InvocationRequest`] / [`InvocationResponse`] - The host-independent
//!   request and response shapes the redirect handler works with

pub mod invocation;
pub mod url_record;

pub use invocation::{InvocationRequest, InvocationResponse};
pub use url_record::UrlRecord;
