//! Short link resolution service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{InvocationRequest, InvocationResponse, UrlRecord};
use crate::domain::repositories::ObjectStore;
use crate::domain::{Clock, ShortCode};
use crate::error::RedirectError;

/// Resolves short codes to redirect responses.
///
/// Holds the shared store client and clock; cloning the `Arc`s is all a host
/// needs to serve concurrent requests.
pub struct RedirectService {
    store: Arc<dyn ObjectStore>,
    clock: Arc<dyn Clock>,
    bucket: String,
}

impl RedirectService {
    /// Creates a new redirect service reading records from `bucket`.
    pub fn new(store: Arc<dyn ObjectStore>, clock: Arc<dyn Clock>, bucket: String) -> Self {
        Self {
            store,
            clock,
            bucket,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn store(&self) -> &Arc<dyn ObjectStore> {
        &self.store
    }

    /// Handles one redirect request.
    ///
    /// # Request Flow
    ///
    /// 1. Strip `/` from the raw path to get the short code
    /// 2. Fetch `<code>.json` from the configured bucket
    /// 3. Decode the record
    /// 4. Return `410 Gone` if it expired before now, otherwise `302 Found`
    ///
    /// # Errors
    ///
    /// - [`RedirectError::InvalidInput`] if the path is missing or has no code;
    ///   the store is not called
    /// - [`RedirectError::StorageFailure`] if the read fails
    /// - [`RedirectError::DeserializationFailure`] if the record is malformed
    pub async fn handle(
        &self,
        request: &InvocationRequest,
    ) -> Result<InvocationResponse, RedirectError> {
        let code = request
            .raw_path
            .as_deref()
            .and_then(ShortCode::from_path)
            .ok_or(RedirectError::InvalidInput)?;

        let record = self.fetch_record(&code).await?;
        let now = self.clock.now_epoch_seconds();

        if record.is_expired_at(now) {
            info!(
                code = %code,
                expiration_time = record.expiration_time,
                now,
                "Short link expired"
            );
            return Ok(InvocationResponse::gone());
        }

        debug!(code = %code, location = %record.original_url, "Redirecting");
        Ok(InvocationResponse::found(record.original_url))
    }

    /// Reads and decodes the record stored for `code`.
    async fn fetch_record(&self, code: &ShortCode) -> Result<UrlRecord, RedirectError> {
        let key = code.storage_key();
        debug!(bucket = %self.bucket, key = %key, "Fetching URL record");

        let bytes = self
            .store
            .get(&self.bucket, &key)
            .await
            .map_err(|source| {
                warn!(bucket = %self.bucket, key = %key, error = %source, "Storage read failed");
                RedirectError::StorageFailure {
                    key: key.clone(),
                    source,
                }
            })?;

        serde_json::from_slice(&bytes).map_err(|source| {
            warn!(key = %key, error = %source, "Stored record is not valid");
            RedirectError::DeserializationFailure { key, source }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::MockClock;
    use crate::domain::entities::invocation::EXPIRED_BODY;
    use crate::domain::repositories::{MockObjectStore, StorageError};

    const BUCKET: &str = "url-shortener-storage-g";
    const NOW: i64 = 1_750_000_000;

    fn fixed_clock(now: i64) -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_now_epoch_seconds().returning(move || now);
        clock
    }

    fn record_json(url: &str, expiration_time: i64) -> Vec<u8> {
        serde_json::to_vec(&UrlRecord::new(url, expiration_time)).unwrap()
    }

    fn service(store: MockObjectStore, clock: MockClock) -> RedirectService {
        RedirectService::new(Arc::new(store), Arc::new(clock), BUCKET.to_string())
    }

    #[tokio::test]
    async fn test_handle_valid_link_redirects() {
        let mut store = MockObjectStore::new();
        let body = record_json("https://example.com", NOW + 3600);
        store
            .expect_get()
            .withf(|bucket, key| bucket == BUCKET && key == "abc123.json")
            .times(1)
            .returning(move |_, _| Ok(body.clone()));

        let service = service(store, fixed_clock(NOW));
        let response = service
            .handle(&InvocationRequest::new("/abc123"))
            .await
            .unwrap();

        assert_eq!(response.status_code, 302);
        assert_eq!(response.location(), Some("https://example.com"));
        assert!(response.body.is_none());
    }

    #[tokio::test]
    async fn test_handle_expired_link_is_gone() {
        let mut store = MockObjectStore::new();
        let body = record_json("https://old.com", 1);
        store
            .expect_get()
            .withf(|_, key| key == "old1.json")
            .times(1)
            .returning(move |_, _| Ok(body.clone()));

        let service = service(store, fixed_clock(NOW));
        let response = service
            .handle(&InvocationRequest::new("/old1"))
            .await
            .unwrap();

        assert_eq!(response.status_code, 410);
        assert_eq!(response.body.as_deref(), Some(EXPIRED_BODY));
        assert!(response.headers.is_none());
    }

    #[tokio::test]
    async fn test_handle_expiration_equal_to_now_is_valid() {
        let mut store = MockObjectStore::new();
        let body = record_json("https://edge.com", NOW);
        store
            .expect_get()
            .times(1)
            .returning(move |_, _| Ok(body.clone()));

        let service = service(store, fixed_clock(NOW));
        let response = service
            .handle(&InvocationRequest::new("/edge"))
            .await
            .unwrap();

        assert_eq!(response.status_code, 302);
        assert_eq!(response.location(), Some("https://edge.com"));
    }

    #[tokio::test]
    async fn test_handle_one_second_past_expiration_is_gone() {
        let mut store = MockObjectStore::new();
        let body = record_json("https://edge.com", NOW - 1);
        store
            .expect_get()
            .times(1)
            .returning(move |_, _| Ok(body.clone()));

        let service = service(store, fixed_clock(NOW));
        let response = service
            .handle(&InvocationRequest::new("/edge"))
            .await
            .unwrap();

        assert_eq!(response.status_code, 410);
    }

    #[tokio::test]
    async fn test_handle_root_path_is_invalid_without_storage_call() {
        let mut store = MockObjectStore::new();
        store.expect_get().times(0);

        let service = service(store, MockClock::new());
        let result = service.handle(&InvocationRequest::new("/")).await;

        assert!(matches!(result, Err(RedirectError::InvalidInput)));
    }

    #[tokio::test]
    async fn test_handle_missing_path_is_invalid() {
        let mut store = MockObjectStore::new();
        store.expect_get().times(0);

        let service = service(store, MockClock::new());
        let result = service.handle(&InvocationRequest::default()).await;

        assert!(matches!(result, Err(RedirectError::InvalidInput)));
    }

    #[tokio::test]
    async fn test_handle_missing_object_is_storage_failure() {
        let mut store = MockObjectStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_, key| Err(StorageError::NotFound(format!("{key} does not exist"))));

        let service = service(store, MockClock::new());
        let result = service.handle(&InvocationRequest::new("/nope")).await;

        match result {
            Err(RedirectError::StorageFailure { key, source }) => {
                assert_eq!(key, "nope.json");
                assert!(source.is_not_found());
                assert!(source.to_string().contains("nope.json does not exist"));
            }
            other => panic!("expected storage failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handle_access_error_is_storage_failure() {
        let mut store = MockObjectStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_, _| Err(StorageError::AccessDenied("forbidden".into())));

        let service = service(store, MockClock::new());
        let result = service.handle(&InvocationRequest::new("/secret")).await;

        assert!(matches!(
            result,
            Err(RedirectError::StorageFailure {
                source: StorageError::AccessDenied(_),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_handle_missing_field_is_deserialization_failure() {
        let mut store = MockObjectStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_, _| Ok(br#"{"originalURL":"https://example.com"}"#.to_vec()));

        let service = service(store, MockClock::new());
        let result = service.handle(&InvocationRequest::new("/broken")).await;

        match result {
            Err(RedirectError::DeserializationFailure { key, source }) => {
                assert_eq!(key, "broken.json");
                assert!(source.to_string().contains("expirationTime"));
            }
            other => panic!("expected deserialization failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handle_malformed_json_is_deserialization_failure() {
        let mut store = MockObjectStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_, _| Ok(b"not json".to_vec()));

        let service = service(store, MockClock::new());
        let result = service.handle(&InvocationRequest::new("/junk")).await;

        assert!(matches!(
            result,
            Err(RedirectError::DeserializationFailure { .. })
        ));
    }
}
