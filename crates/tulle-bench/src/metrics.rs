//! Benchmark metrics — data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Strategy name.
    pub strategy: String,
    /// Lattice point count.
    pub point_count: usize,
    /// Number of ticks executed.
    pub ticks: u64,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per tick (seconds).
    pub avg_tick_time: f64,
    /// Minimum tick time.
    pub min_tick_time: f64,
    /// Maximum tick time.
    pub max_tick_time: f64,
    /// Degenerate link visits skipped across the whole run.
    pub total_skipped_links: u64,
    /// Total stretch violation at the final state.
    pub final_stretch: f64,
}

impl BenchmarkMetrics {
    /// Format the CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,strategy,point_count,ticks,total_wall_time_s,avg_tick_ms,min_tick_ms,max_tick_ms,skipped_links,final_stretch".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{},{:.6}",
            self.scenario,
            self.strategy,
            self.point_count,
            self.ticks,
            self.total_wall_time,
            self.avg_tick_time * 1000.0,
            self.min_tick_time * 1000.0,
            self.max_tick_time * 1000.0,
            self.total_skipped_links,
            self.final_stretch,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
