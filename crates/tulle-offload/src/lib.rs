//! # tulle-offload
//!
//! Compute-offload abstraction for the Tulle cloth engine.
//!
//! Provides a [`ComputeChannel`] trait with one implementation:
//! - [`HostChannel`] — In-process reference channel (always available).
//!
//! A device-backed channel plugs in behind the same trait without
//! changing the simulation pipeline: the offloaded execution strategy
//! only sees `submit_batch`, whole-array transfers, and blocking
//! completion.

pub mod buffers;
pub mod channel;

pub use buffers::{ComputeBuffer, SeedBuffer};
pub use channel::{ComputeChannel, HostChannel, KernelArgs, KernelBuffers, KernelId};
