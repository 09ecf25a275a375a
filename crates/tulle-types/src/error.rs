//! Error types for the Tulle engine.
//!
//! All crates return `TulleResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Tulle engine.
#[derive(Debug, Error)]
pub enum TulleError {
    /// Lattice data is malformed or inconsistent.
    #[error("Invalid lattice: {0}")]
    InvalidLattice(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A simulation object was used before its one-time initialization.
    #[error("Uninitialized: {0}")]
    Uninitialized(String),

    /// Compute-offload channel failure (buffer layout mismatch,
    /// unknown kernel, transfer error).
    #[error("Offload channel error: {0}")]
    Offload(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, TulleError>`.
pub type TulleResult<T> = Result<T, TulleError>;
