//! URL record entity as stored in the object store.

use serde::{Deserialize, Serialize};

/// A stored short-link target with its expiry.
///
/// The short code is not part of the record; it is the storage key the record
/// was fetched under. Field names on the wire are `originalURL` and
/// `expirationTime` (Unix seconds); any other field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlRecord {
    #[serde(rename = "originalURL")]
    pub original_url: String,
    #[serde(rename = "expirationTime")]
    pub expiration_time: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(original_url: impl Into<String>, expiration_time: i64) -> Self {
        Self {
            original_url: original_url.into(),
            expiration_time,
        }
    }

    /// Returns true if the record expired strictly before `now` (epoch seconds).
    ///
    /// A record whose expiration equals `now` is still valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expiration_time < now
    }
}
