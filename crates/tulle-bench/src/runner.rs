//! Benchmark runner — drives scenarios with a strategy and collects metrics.

use std::time::Instant;

use tulle_solver::ClothSim;
use tulle_telemetry::events::{EventKind, SimulationEvent};
use tulle_telemetry::EventBus;
use tulle_types::TulleResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind, StrategyKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario with the given strategy.
    ///
    /// Returns metrics for the completed run.
    pub fn run(scenario: &Scenario, strategy: StrategyKind) -> TulleResult<BenchmarkMetrics> {
        let mut bus = EventBus::new();
        bus.set_enabled(false);
        Self::run_with_bus(scenario, strategy, &mut bus)
    }

    /// Run a single scenario, emitting per-tick telemetry on `bus`.
    ///
    /// Each tick produces `TickBegin`, `SkippedLinks`, `WindRange`, and
    /// `TickEnd` events; the run closes with one `Stretch` event. The
    /// bus is flushed once per tick so sinks see events promptly.
    pub fn run_with_bus(
        scenario: &Scenario,
        strategy: StrategyKind,
        bus: &mut EventBus,
    ) -> TulleResult<BenchmarkMetrics> {
        let mut sim = ClothSim::new(scenario.config.clone(), strategy.build())?;

        let mut tick_times: Vec<f64> = Vec::with_capacity(scenario.ticks as usize);
        let mut total_skipped: u64 = 0;

        let total_start = Instant::now();

        for _ in 0..scenario.ticks {
            let tick = sim.ticks();
            bus.emit(SimulationEvent::new(tick, EventKind::TickBegin));

            let report = sim.tick()?;
            tick_times.push(report.wall_time);
            total_skipped += report.skipped_links;

            bus.emit(SimulationEvent::new(
                tick,
                EventKind::SkippedLinks {
                    count: report.skipped_links,
                },
            ));
            bus.emit(SimulationEvent::new(
                tick,
                EventKind::WindRange {
                    range: sim.state().wind_range,
                },
            ));
            bus.emit(SimulationEvent::new(
                tick,
                EventKind::TickEnd {
                    wall_time: report.wall_time,
                },
            ));
            bus.flush();
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let final_stretch = sim.stretch_violation();
        bus.emit(SimulationEvent::new(
            sim.ticks(),
            EventKind::Stretch {
                total_violation: final_stretch,
            },
        ));
        bus.flush();

        let (avg_tick_time, min_tick_time, max_tick_time) = if tick_times.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (
                tick_times.iter().sum::<f64>() / tick_times.len() as f64,
                tick_times.iter().copied().fold(f64::MAX, f64::min),
                tick_times.iter().copied().fold(0.0, f64::max),
            )
        };

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            strategy: strategy.name().to_string(),
            point_count: sim.lattice().point_count(),
            ticks: scenario.ticks,
            total_wall_time,
            avg_tick_time,
            min_tick_time,
            max_tick_time,
            total_skipped_links: total_skipped,
            final_stretch,
        })
    }

    /// Run every scenario with one strategy.
    pub fn run_all(strategy: StrategyKind) -> TulleResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario, strategy)?);
        }
        Ok(results)
    }

    /// Run one scenario with every strategy (the speedup table).
    ///
    /// All strategies start from the same seeded configuration, so any
    /// divergence in the result columns points at a strategy bug rather
    /// than at the scenario.
    pub fn compare(scenario: &Scenario) -> TulleResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &strategy in StrategyKind::all() {
            results.push(Self::run(scenario, strategy)?);
        }
        Ok(results)
    }
}
