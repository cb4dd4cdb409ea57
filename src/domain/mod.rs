//! Domain layer containing the record model and storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Stored record and request/response shapes
//! - [`repositories`] - Object store trait definition
//! - [`short_code`] - Short code extraction and key derivation
//! - [`clock`] - Time source used for expiration
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod clock;
pub mod entities;
pub mod repositories;
pub mod short_code;

pub use clock::{Clock, FixedClock, SystemClock};
pub use short_code::ShortCode;
