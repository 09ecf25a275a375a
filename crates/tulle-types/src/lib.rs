//! # tulle-types
//!
//! Shared types, identifiers, error types, and tuning constants for the
//! Tulle cloth engine, plus the per-point random-stream primitive that
//! every execution strategy shares.
//!
//! This crate has no simulation logic of its own; it defines the
//! vocabulary that all other Tulle crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod rng;
pub mod scalar;

pub use error::{TulleError, TulleResult};
pub use ids::PointId;
pub use scalar::Scalar;
