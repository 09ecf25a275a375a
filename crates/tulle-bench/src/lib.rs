//! # tulle-bench
//!
//! Benchmark suite for the Tulle cloth engine.
//!
//! Provides three canonical scenarios, a runner that drives any
//! execution strategy over them, and CSV/JSON metric export for
//! regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind, StrategyKind};
