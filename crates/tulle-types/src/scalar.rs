//! Scalar type alias for the simulation.
//!
//! Using `f32` keeps every layout view (scalar, lane-batched, transfer
//! buffers) bit-compatible with device floats.

/// The floating-point type used throughout the simulation.
///
/// Set to `f32` so channel buffers transfer across the compute-offload
/// boundary without conversion.
pub type Scalar = f32;
