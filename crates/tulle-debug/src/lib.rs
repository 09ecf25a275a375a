//! # tulle-debug
//!
//! Binary state snapshots for inspecting and diffing cloth runs.
//! Captures tick-aligned position history compactly with `bincode`.

pub mod snapshot;

pub use snapshot::StateSnapshot;
