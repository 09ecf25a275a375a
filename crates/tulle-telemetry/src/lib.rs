//! # tulle-telemetry
//!
//! Event bus for simulation telemetry. Emits structured per-tick
//! events (timing, skipped links, stretch, wind state) that can be
//! consumed by pluggable sinks (in-memory capture, `tracing` logs,
//! CSV writers, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::SimulationEvent;
