//! Event sinks.
//!
//! A sink is the consuming end of the bus: it receives each drained
//! event and does something with it — keeps it in memory, forwards it
//! to `tracing`, appends it to a CSV, whatever the embedder needs.

use crate::events::{EventKind, SimulationEvent};

/// The consuming side of the event bus.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the simulation ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// In-memory sink: every handled event lands in [`events`], in
/// delivery order. Mostly for tests and short diagnostic runs.
///
/// [`events`]: VecSink::events
pub struct VecSink {
    /// Events in the order they were delivered.
    pub events: Vec<SimulationEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events recorded for one tick, in delivery order.
    pub fn for_tick(&self, tick: u64) -> Vec<&SimulationEvent> {
        self.events.iter().filter(|e| e.tick == tick).collect()
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Forwards events to the `tracing` crate with per-kind fields.
///
/// Tick lifecycle events log at the configured level; the per-tick
/// diagnostics (skipped links, wind range) always log at DEBUG so a
/// default-level subscriber sees the tick rhythm without the noise.
/// No subscriber is installed here; that is the embedder's call.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a sink logging lifecycle events at `level`.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }

    fn lifecycle(&self, tick: u64, message: &str, value: f64) {
        match self.level {
            tracing::Level::ERROR => tracing::error!(tick, value, "{message}"),
            tracing::Level::WARN => tracing::warn!(tick, value, "{message}"),
            tracing::Level::INFO => tracing::info!(tick, value, "{message}"),
            tracing::Level::DEBUG => tracing::debug!(tick, value, "{message}"),
            tracing::Level::TRACE => tracing::trace!(tick, value, "{message}"),
        }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        let tick = event.tick;
        match &event.kind {
            EventKind::TickBegin => self.lifecycle(tick, "tick_begin", 0.0),
            EventKind::TickEnd { wall_time } => {
                self.lifecycle(tick, "tick_end", wall_time * 1000.0)
            }
            EventKind::SkippedLinks { count } => {
                tracing::debug!(tick, count, "skipped_links");
            }
            EventKind::WindRange { range } => {
                tracing::debug!(tick, range, "wind_range");
            }
            EventKind::Stretch { total_violation } => {
                self.lifecycle(tick, "stretch_violation", *total_violation)
            }
            EventKind::Custom { label, value } => {
                tracing::debug!(tick, label = label.as_str(), value, "custom");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
