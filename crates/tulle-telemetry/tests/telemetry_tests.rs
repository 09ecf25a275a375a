//! Integration tests for tulle-telemetry.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use tulle_telemetry::bus::EventBus;
use tulle_telemetry::events::{EventKind, SimulationEvent};
use tulle_telemetry::sinks::{EventSink, TracingSink, VecSink};

/// Test sink that exposes dispatch and finalize through shared counters,
/// so delivery can be observed even though the bus owns the sink.
struct CountingSink {
    handled: Arc<AtomicUsize>,
    finalized: Arc<AtomicBool>,
}

impl EventSink for CountingSink {
    fn handle(&mut self, _event: &SimulationEvent) {
        self.handled.fetch_add(1, Ordering::SeqCst);
    }

    fn finalize(&mut self) {
        self.finalized.store(true, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "counting_sink"
    }
}

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));

    bus.emit(SimulationEvent::new(0, EventKind::TickBegin));
    bus.emit(SimulationEvent::new(0, EventKind::TickEnd { wall_time: 0.001 }));

    assert_eq!(bus.flush(), 2);
    // Queue is drained, so a second flush finds nothing.
    assert_eq!(bus.flush(), 0);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.emit(SimulationEvent::new(0, EventKind::TickBegin));
    assert_eq!(bus.flush(), 0);

    bus.set_enabled(true);
    bus.emit(SimulationEvent::new(1, EventKind::TickBegin));
    assert_eq!(bus.flush(), 1);
}

#[test]
fn multiple_sinks() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    bus.add_sink(Box::new(VecSink::new()));
    assert_eq!(bus.sink_count(), 2);

    // One event counts once even though both sinks receive it.
    bus.emit(SimulationEvent::new(3, EventKind::WindRange { range: 0.13 }));
    assert_eq!(bus.flush(), 1);
}

#[test]
fn sinks_observe_dispatch_and_finalize() {
    let handled = Arc::new(AtomicUsize::new(0));
    let finalized = Arc::new(AtomicBool::new(false));

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CountingSink {
        handled: Arc::clone(&handled),
        finalized: Arc::clone(&finalized),
    }));

    bus.emit(SimulationEvent::new(0, EventKind::TickBegin));
    bus.emit(SimulationEvent::new(0, EventKind::SkippedLinks { count: 4 }));
    bus.emit(SimulationEvent::new(0, EventKind::TickEnd { wall_time: 0.002 }));
    assert_eq!(bus.flush(), 3);
    assert_eq!(handled.load(Ordering::SeqCst), 3);
    assert!(!finalized.load(Ordering::SeqCst));

    // Finalize drains anything still queued before closing the sinks.
    bus.emit(SimulationEvent::new(1, EventKind::TickBegin));
    bus.finalize();
    assert_eq!(handled.load(Ordering::SeqCst), 4);
    assert!(finalized.load(Ordering::SeqCst));
}

// ─── Sink Tests ───────────────────────────────────────────────

#[test]
fn vec_sink_records_events() {
    let mut sink = VecSink::new();
    sink.handle(&SimulationEvent::new(7, EventKind::TickBegin));
    sink.handle(&SimulationEvent::new(
        7,
        EventKind::Stretch {
            total_violation: 0.25,
        },
    ));

    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.events[0].tick, 7);
    assert!(matches!(sink.events[0].kind, EventKind::TickBegin));
    assert!(matches!(sink.events[1].kind, EventKind::Stretch { .. }));
    assert_eq!(sink.name(), "vec_sink");
}

#[test]
fn vec_sink_filters_by_tick() {
    let mut sink = VecSink::new();
    sink.handle(&SimulationEvent::new(0, EventKind::TickBegin));
    sink.handle(&SimulationEvent::new(1, EventKind::TickBegin));
    sink.handle(&SimulationEvent::new(1, EventKind::TickEnd { wall_time: 0.01 }));

    assert_eq!(sink.for_tick(0).len(), 1);
    assert_eq!(sink.for_tick(1).len(), 2);
    assert!(sink.for_tick(9).is_empty());
}

#[test]
fn tracing_sink_handles_every_event_kind() {
    // No subscriber installed; this only pins that dispatch is total
    // over the event kinds and does not panic.
    let mut sink = TracingSink::new(tracing::Level::INFO);
    for kind in [
        EventKind::TickBegin,
        EventKind::TickEnd { wall_time: 0.01 },
        EventKind::SkippedLinks { count: 2 },
        EventKind::WindRange { range: 0.13 },
        EventKind::Stretch {
            total_violation: 0.5,
        },
        EventKind::Custom {
            label: "avg_tick_ms".to_string(),
            value: 1.0,
        },
    ] {
        sink.handle(&SimulationEvent::new(0, kind));
    }
    assert_eq!(sink.name(), "tracing_sink");
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(5, EventKind::TickEnd { wall_time: 0.0042 });
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.tick, 5);
    assert!(matches!(
        recovered.kind,
        EventKind::TickEnd { wall_time } if wall_time == 0.0042
    ));
}

#[test]
fn skipped_links_event() {
    let event = SimulationEvent::new(10, EventKind::SkippedLinks { count: 3 });
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("SkippedLinks"));
    assert!(json.contains("count"));
}

#[test]
fn custom_event_round_trips() {
    let event = SimulationEvent::new(
        2,
        EventKind::Custom {
            label: "avg_tick_ms".to_string(),
            value: 1.75,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        recovered.kind,
        EventKind::Custom { ref label, value } if label == "avg_tick_ms" && value == 1.75
    ));
}
