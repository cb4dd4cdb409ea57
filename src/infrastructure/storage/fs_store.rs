//! Local filesystem implementation of the object store.

use async_trait::async_trait;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::domain::repositories::{ObjectStore, StorageError};

/// Object store backed by a directory tree.
///
/// Objects live at `<root>/<bucket>/<key>`. Intended for local development and
/// tests where an S3 endpoint is not available.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        debug!(root = %root.display(), "Using filesystem object store");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves an object path, refusing anything that could leave the root.
    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StorageError> {
        let bucket_dir = self.bucket_path(bucket)?;

        if !is_single_component(key) {
            return Err(StorageError::NotFound(format!(
                "invalid object key '{key}'"
            )));
        }

        Ok(bucket_dir.join(key))
    }

    fn bucket_path(&self, bucket: &str) -> Result<PathBuf, StorageError> {
        if !is_single_component(bucket) {
            return Err(StorageError::NotFound(format!(
                "invalid bucket name '{bucket}'"
            )));
        }

        Ok(self.root.join(bucket))
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn map_io_error(err: io::Error, path: &Path) -> StorageError {
    let message = format!("{}: {}", path.display(), err);
    match err.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound(message),
        io::ErrorKind::PermissionDenied => StorageError::AccessDenied(message),
        _ => StorageError::Unavailable(message),
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.object_path(bucket, key)?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| map_io_error(e, &path))
    }

    async fn health_check(&self, bucket: &str) -> Result<(), StorageError> {
        let path = self.bucket_path(bucket)?;
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| map_io_error(e, &path))?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(StorageError::NotFound(format!(
                "{} is not a directory",
                path.display()
            )))
        }
    }

    fn backend_name(&self) -> &'static str {
        "fs"
    }
}
