//! Object store implementations.
//!
//! Provides two implementations of [`crate::domain::repositories::ObjectStore`]:
//! - [`S3ObjectStore`] - Amazon S3 or any S3-compatible endpoint
//! - [`FsObjectStore`] - Local directory tree for development and tests

mod fs_store;
mod s3_store;

pub use fs_store::FsObjectStore;
pub use s3_store::S3ObjectStore;
