//! CLI command implementations.

use tulle_bench::metrics::BenchmarkMetrics;
use tulle_bench::runner::BenchmarkRunner;
use tulle_bench::scenarios::{Scenario, ScenarioKind, StrategyKind};
use tulle_debug::snapshot::StateSnapshot;
use tulle_render::renderer::{RenderFrame, Renderer};
use tulle_render::JsonFrameExporter;
use tulle_solver::{ClothConfig, ClothSim};
use tulle_telemetry::events::{EventKind, SimulationEvent};
use tulle_telemetry::sinks::TracingSink;
use tulle_telemetry::EventBus;

fn parse_strategy(name: &str) -> Result<StrategyKind, Box<dyn std::error::Error>> {
    match name {
        "scalar" => Ok(StrategyKind::Scalar),
        "batched" => Ok(StrategyKind::Batched),
        "offloaded" => Ok(StrategyKind::Offloaded),
        other => {
            eprintln!("Unknown strategy: {other}");
            eprintln!("Available: scalar, batched, offloaded");
            Err("Unknown strategy".into())
        }
    }
}

fn parse_scenario(name: &str) -> Result<ScenarioKind, Box<dyn std::error::Error>> {
    match name {
        "curtain" => Ok(ScenarioKind::Curtain),
        "curtain_small" => Ok(ScenarioKind::CurtainSmall),
        "becalmed" => Ok(ScenarioKind::Becalmed),
        other => {
            eprintln!("Unknown scenario: {other}");
            eprintln!("Available: curtain, curtain_small, becalmed, all");
            Err("Unknown scenario".into())
        }
    }
}

fn load_config(path: Option<&str>) -> Result<ClothConfig, Box<dyn std::error::Error>> {
    let config: ClothConfig = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)?;
            toml::from_str(&content)?
        }
        None => ClothConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Run a simulation for a fixed number of ticks.
pub fn simulate(
    config_path: Option<&str>,
    ticks: u64,
    strategy_name: &str,
    snapshot_path: Option<&str>,
    export_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tulle Simulation");
    println!("────────────────");

    let config = load_config(config_path)?;
    let strategy = parse_strategy(strategy_name)?;
    let mut sim = ClothSim::new(config, strategy.build())?;

    println!(
        "Lattice:   {0}×{0} ({1} points)",
        sim.lattice().size(),
        sim.lattice().point_count()
    );
    println!("Strategy:  {}", sim.strategy_name());
    println!("Ticks:     {ticks}");
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    let mut exporter = export_path.map(JsonFrameExporter::new);
    if let Some(ex) = exporter.as_mut() {
        ex.init(sim.lattice().point_count())?;
    }

    let mut tick_times: Vec<f64> = Vec::with_capacity(ticks as usize);
    let mut total_skipped: u64 = 0;

    for _ in 0..ticks {
        let tick = sim.ticks();
        bus.emit(SimulationEvent::new(tick, EventKind::TickBegin));

        let report = sim.tick()?;
        tick_times.push(report.wall_time);
        total_skipped += report.skipped_links;

        bus.emit(SimulationEvent::new(
            tick,
            EventKind::TickEnd {
                wall_time: report.wall_time,
            },
        ));

        if let Some(ex) = exporter.as_mut() {
            let (xs, ys) = sim.positions();
            ex.submit_frame(&RenderFrame::from_positions(sim.ticks(), xs, ys))?;
        }
        bus.flush();
    }

    let solver_time: f64 = tick_times.iter().sum();
    let avg_ms = if tick_times.is_empty() {
        0.0
    } else {
        solver_time / tick_times.len() as f64 * 1000.0
    };
    let final_stretch = sim.stretch_violation();

    bus.emit(SimulationEvent::new(
        sim.ticks(),
        EventKind::Stretch {
            total_violation: final_stretch,
        },
    ));
    bus.emit(SimulationEvent::new(
        sim.ticks(),
        EventKind::Custom {
            label: "avg_tick_ms".to_string(),
            value: avg_ms,
        },
    ));
    bus.finalize();

    println!("Ticks run:      {}", sim.ticks());
    println!("Solver time:    {solver_time:.3}s");
    println!("Avg tick:       {avg_ms:.3}ms");
    println!("Skipped links:  {total_skipped}");
    println!("Final stretch:  {final_stretch:.6}");
    println!("Wind range:     {:.4}", sim.state().wind_range);

    if let Some(path) = snapshot_path {
        let snap = StateSnapshot::capture(&sim)?;
        std::fs::write(path, snap.to_bytes()?)?;
        println!("Snapshot written to: {path}");
    }

    if let (Some(mut ex), Some(path)) = (exporter, export_path) {
        ex.finalize()?;
        println!("Animation written to: {path}");
    }

    Ok(())
}

/// Run benchmark scenarios.
pub fn benchmark(
    scenario_name: &str,
    strategy_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tulle Benchmark Suite");
    println!("═════════════════════");
    println!("Scenario:  {scenario_name}");
    println!("Strategy:  {strategy_name}");
    println!();

    let mut all_metrics: Vec<BenchmarkMetrics> = Vec::new();

    if scenario_name == "all" {
        let strategies: Vec<StrategyKind> = if strategy_name == "all" {
            StrategyKind::all().to_vec()
        } else {
            vec![parse_strategy(strategy_name)?]
        };
        for &strategy in &strategies {
            let rows = BenchmarkRunner::run_all(strategy)
                .map_err(|e| format!("Benchmark failed: {e}"))?;
            all_metrics.extend(rows);
        }
    } else {
        let scenario = Scenario::from_kind(parse_scenario(scenario_name)?);
        if strategy_name == "all" {
            all_metrics = BenchmarkRunner::compare(&scenario)
                .map_err(|e| format!("Benchmark failed: {e}"))?;
        } else {
            let strategy = parse_strategy(strategy_name)?;
            all_metrics.push(
                BenchmarkRunner::run(&scenario, strategy)
                    .map_err(|e| format!("Benchmark failed: {e}"))?,
            );
        }
    }

    for m in &all_metrics {
        println!(
            "{} / {} ({} points, {} ticks)",
            m.scenario, m.strategy, m.point_count, m.ticks
        );
        println!("  Wall time:      {:.3}s", m.total_wall_time);
        println!("  Avg tick:       {:.3}ms", m.avg_tick_time * 1000.0);
        println!("  Skipped links:  {}", m.total_skipped_links);
        println!("  Final stretch:  {:.6}", m.final_stretch);
        println!();
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tulle Snapshot Inspector");
    println!("────────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let snapshot =
        StateSnapshot::from_bytes(&data).map_err(|e| format!("Failed to read snapshot: {e}"))?;
    snapshot
        .validate()
        .map_err(|e| format!("Snapshot is inconsistent: {e}"))?;

    println!("Tick:          {}", snapshot.tick);
    println!("Points:        {}", snapshot.point_count);
    println!("Wind range:    {:.4}", snapshot.wind_range);
    println!("Pos entries:   {}", snapshot.positions.len());

    // Quick stats
    if !snapshot.positions.is_empty() {
        let min_y = snapshot
            .positions
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 1) // Y components
            .map(|(_, v)| *v)
            .fold(f32::INFINITY, f32::min);
        let max_y = snapshot
            .positions
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 1)
            .map(|(_, v)| *v)
            .fold(f32::NEG_INFINITY, f32::max);
        println!("Y range:       [{min_y:.4}, {max_y:.4}]");
    }

    Ok(())
}

/// Validate a cloth config file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tulle Validator");
    println!("───────────────");
    println!();

    println!("Validating config: {path}");
    let content = std::fs::read_to_string(path)?;
    let config: ClothConfig = toml::from_str(&content)?;
    match config.validate() {
        Ok(()) => println!(
            "✅ Config is valid ({0}×{0} lattice, seed {1}).",
            config.lattice.size, config.seed
        ),
        Err(e) => println!("❌ Config validation failed: {e}"),
    }

    Ok(())
}
