//! Infrastructure layer for external integrations.
//!
//! Implements the storage interface defined by the domain layer.
//!
//! # Modules
//!
//! - [`storage`] - S3 and filesystem object stores

pub mod storage;
