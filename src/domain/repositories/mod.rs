//! Data access trait definitions for the domain layer.
//!
//! Traits define the contract for reads; implementations live in
//! `crate::infrastructure::storage`. Mock implementations are generated via
//! `mockall` for testing.

pub mod object_store;

pub use object_store::{ObjectStore, StorageError};

#[cfg(test)]
pub use object_store::MockObjectStore;
