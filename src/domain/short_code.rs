//! Short code value type and storage key derivation.

use std::fmt;

/// Suffix appended to a short code to form its object key.
pub const KEY_SUFFIX: &str = ".json";

/// A non-empty short code taken from a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Derives a short code by removing every `/` from the raw path.
    ///
    /// Returns `None` when nothing is left, so `/`, `//` and the empty string
    /// all fail the same way.
    pub fn from_path(raw_path: &str) -> Option<Self> {
        let code: String = raw_path.chars().filter(|c| *c != '/').collect();

        if code.is_empty() {
            None
        } else {
            Some(Self(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object key for this code, e.g. `abc123.json`.
    pub fn storage_key(&self) -> String {
        format!("{}{}", self.0, KEY_SUFFIX)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
