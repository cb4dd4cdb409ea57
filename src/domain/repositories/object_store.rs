//! Read-only object store interface used to fetch URL records.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reading an object, classified by cause.
///
/// The message keeps the backend's own description for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Storage reader for URL records.
///
/// One instance is created per process and shared across concurrent requests,
/// so implementations must not hold per-request state.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::S3ObjectStore`] - Amazon S3 (or S3-compatible)
/// - [`crate::infrastructure::storage::FsObjectStore`] - Local directory tree
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Reads the full contents of `key` in `bucket`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the object or bucket is missing,
    /// [`StorageError::AccessDenied`] on permission failures and
    /// [`StorageError::Unavailable`] for anything else.
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Checks that `bucket` is reachable.
    ///
    /// Used by health check endpoints to report storage status.
    async fn health_check(&self, bucket: &str) -> Result<(), StorageError>;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
