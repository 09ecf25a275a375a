//! The event bus.
//!
//! Producers call [`emit`] from anywhere in the tick; the bus queues
//! events on an `std::sync::mpsc` channel and delivers them to every
//! registered sink when the driver calls [`flush`], typically once per
//! tick. Emission is therefore cheap inside the hot loop, and sinks
//! only ever run between ticks, never in the middle of a step.
//!
//! [`emit`]: EventBus::emit
//! [`flush`]: EventBus::flush

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Queues simulation events and fans them out to sinks on flush.
pub struct EventBus {
    sender: mpsc::Sender<SimulationEvent>,
    receiver: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    enabled: bool,
}

impl EventBus {
    /// Creates a bus with no sinks. Events emitted before any sink is
    /// registered queue up and reach sinks added later, on the next
    /// flush.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink. Every flushed event reaches every sink, in
    /// registration order.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. A disabled bus drops emitted
    /// events instead of queuing them.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the bus is currently queuing events.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event for the next flush. No-op while disabled.
    pub fn emit(&self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives as long as the bus, so send cannot fail.
        let _ = self.sender.send(event);
    }

    /// Drains the queue into every sink and returns how many events
    /// were delivered. Call once per tick, and at shutdown.
    pub fn flush(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            drained += 1;
        }
        drained
    }

    /// Delivers anything still queued, then closes every sink.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
