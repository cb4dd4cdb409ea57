//! Host-independent request and response shapes.
//!
//! These mirror the function-URL event format: the request carries `rawPath`,
//! the response carries `statusCode`, optional `headers` and optional `body`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body returned for a link past its expiration time.
pub const EXPIRED_BODY: &str = "URL has expired";

/// Incoming request descriptor.
///
/// Only the path matters to the redirect handler; any other request metadata
/// supplied by the host is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    #[serde(default)]
    pub raw_path: Option<String>,
}

impl InvocationRequest {
    pub fn new(raw_path: impl Into<String>) -> Self {
        Self {
            raw_path: Some(raw_path.into()),
        }
    }
}

/// Response produced by the redirect handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl InvocationResponse {
    /// `302 Found` with a `Location` header and no body.
    pub fn found(location: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Location".to_string(), location.into());

        Self {
            status_code: 302,
            headers: Some(headers),
            body: None,
        }
    }

    /// `410 Gone` with the expiration message as a plain-text body.
    pub fn gone() -> Self {
        Self {
            status_code: 410,
            headers: None,
            body: Some(EXPIRED_BODY.to_string()),
        }
    }

    /// Returns the `Location` header, if present.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|h| h.get("Location"))
            .map(String::as_str)
    }
}
