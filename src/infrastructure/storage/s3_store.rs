//! Amazon S3 implementation of the object store.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3 as s3;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use tracing::debug;

use crate::domain::repositories::{ObjectStore, StorageError};

/// S3-backed object store.
///
/// The client is built once and cloned freely; it keeps its own connection pool.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: s3::Client) -> Self {
        Self { client }
    }

    /// Builds a client from the default AWS credential and region chain.
    ///
    /// When `endpoint_url` is set, requests go to that endpoint with path-style
    /// addressing, which is what S3-compatible local servers expect.
    pub async fn from_env(endpoint_url: Option<&str>) -> Self {
        let shared = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let mut builder = s3::config::Builder::from(&shared);

        if let Some(url) = endpoint_url {
            debug!(endpoint = %url, "Using custom S3 endpoint");
            builder = builder.endpoint_url(url).force_path_style(true);
        }

        Self::new(s3::Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("s3://{bucket}/{key}")))?;

        let data = output.body.collect().await.map_err(|e| {
            StorageError::Unavailable(format!("reading s3://{bucket}/{key}: {e}"))
        })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn health_check(&self, bucket: &str) -> Result<(), StorageError> {
        self.client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, &format!("s3://{bucket}")))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "s3"
    }
}

fn map_sdk_error<E>(err: SdkError<E, HttpResponse>, target: &str) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let (code, status) = match &err {
        SdkError::ServiceError(ctx) => (
            ctx.err().code().map(str::to_string),
            Some(ctx.raw().status().as_u16()),
        ),
        _ => (None, None),
    };

    let message = format!("{target}: {}", DisplayErrorContext(&err));
    classify(code.as_deref(), status, message)
}

/// Maps an S3 error code and HTTP status onto a [`StorageError`] kind.
fn classify(code: Option<&str>, status: Option<u16>, message: String) -> StorageError {
    match (code, status) {
        (Some("NoSuchKey" | "NoSuchBucket" | "NotFound"), _) | (_, Some(404)) => {
            StorageError::NotFound(message)
        }
        (Some("AccessDenied" | "Forbidden" | "InvalidAccessKeyId"), _) | (_, Some(403)) => {
            StorageError::AccessDenied(message)
        }
        _ => StorageError::Unavailable(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        assert!(matches!(
            classify(Some("NoSuchKey"), Some(404), "m".into()),
            StorageError::NotFound(_)
        ));
        assert!(matches!(
            classify(Some("NoSuchBucket"), None, "m".into()),
            StorageError::NotFound(_)
        ));
        assert!(matches!(
            classify(None, Some(404), "m".into()),
            StorageError::NotFound(_)
        ));
    }

    #[test]
    fn test_classify_access_denied() {
        assert!(matches!(
            classify(Some("AccessDenied"), Some(403), "m".into()),
            StorageError::AccessDenied(_)
        ));
        assert!(matches!(
            classify(None, Some(403), "m".into()),
            StorageError::AccessDenied(_)
        ));
    }

    #[test]
    fn test_classify_other_is_unavailable() {
        let err = classify(Some("SlowDown"), Some(503), "s3://b/k: throttled".into());
        assert_eq!(
            err,
            StorageError::Unavailable("s3://b/k: throttled".to_string())
        );
        assert!(matches!(
            classify(None, None, "m".into()),
            StorageError::Unavailable(_)
        ));
    }
}
