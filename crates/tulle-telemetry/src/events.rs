//! Simulation event types.
//!
//! Structured events emitted around each tick of the cloth solver.
//! Events are lightweight value types that carry just enough data to
//! be useful for monitoring and benchmarking.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the solver driver.
///
/// Events are tagged with a tick index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Tick number (0-indexed).
    pub tick: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Tick started.
    TickBegin,

    /// Tick completed.
    TickEnd {
        /// Wall-clock time for the entire tick (seconds).
        wall_time: f64,
    },

    /// Degenerate links encountered during the tick's relaxation passes.
    SkippedLinks {
        /// Number of link visits skipped across all passes.
        count: u64,
    },

    /// Aggregate stretch report at the current state.
    Stretch {
        /// Sum of over-extension beyond rest length across all links.
        total_violation: f64,
    },

    /// Current gust strength bound.
    WindRange {
        /// Horizontal impulse bound after growth so far.
        range: f32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// Numeric payload.
        value: f64,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
