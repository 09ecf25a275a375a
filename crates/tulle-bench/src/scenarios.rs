//! Benchmark scenarios — lattice size, forces, and duration for each test case.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Curtain** — full-size lattice under the default wind
//! 2. **CurtainSmall** — reduced lattice for quick comparative runs
//! 3. **Becalmed** — wind disabled, so only gravity and relaxation act

use serde::{Deserialize, Serialize};

use tulle_solver::{
    BatchedStrategy, ClothConfig, ExecutionStrategy, OffloadedStrategy, ScalarStrategy,
};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Full-size curtain under the default wind.
    Curtain,
    /// Reduced curtain for quick runs.
    CurtainSmall,
    /// Still air; gravity and relaxation only.
    Becalmed,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::Curtain,
            ScenarioKind::CurtainSmall,
            ScenarioKind::Becalmed,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Curtain => "curtain",
            ScenarioKind::CurtainSmall => "curtain_small",
            ScenarioKind::Becalmed => "becalmed",
        }
    }
}

/// Which execution strategy drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Point-at-a-time reference strategy.
    Scalar,
    /// Fixed-width lane batching.
    Batched,
    /// Kernel submission through a compute channel.
    Offloaded,
}

impl StrategyKind {
    /// Returns all strategy kinds.
    pub fn all() -> &'static [StrategyKind] {
        &[
            StrategyKind::Scalar,
            StrategyKind::Batched,
            StrategyKind::Offloaded,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Scalar => "scalar",
            StrategyKind::Batched => "batched",
            StrategyKind::Offloaded => "offloaded",
        }
    }

    /// Builds a fresh boxed strategy of this kind.
    pub fn build(&self) -> Box<dyn ExecutionStrategy> {
        match self {
            StrategyKind::Scalar => Box::new(ScalarStrategy::new()),
            StrategyKind::Batched => Box::new(BatchedStrategy::new()),
            StrategyKind::Offloaded => Box::new(OffloadedStrategy::with_host_channel()),
        }
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Cloth configuration.
    pub config: ClothConfig,
    /// Number of ticks to simulate.
    pub ticks: u64,
    /// What the scenario measures, independent of strategy.
    pub description: &'static str,
}

impl Scenario {
    /// Create the full-size curtain scenario.
    ///
    /// The default lattice with the default forces, long enough for
    /// the wind growth to become visible in the timings.
    pub fn curtain() -> Self {
        Self {
            kind: ScenarioKind::Curtain,
            config: ClothConfig::default(),
            ticks: 24,
            description: "full-size curtain under the default wind",
        }
    }

    /// Create the reduced curtain scenario.
    ///
    /// Same forces on a 64×64 lattice; cheap enough to run per-commit.
    pub fn curtain_small() -> Self {
        Self {
            kind: ScenarioKind::CurtainSmall,
            config: ClothConfig::small(),
            ticks: 100,
            description: "reduced curtain for quick comparative runs",
        }
    }

    /// Create the becalmed scenario.
    ///
    /// A 64×64 lattice with wind disabled, so the run measures the
    /// constraint relaxation converging under gravity alone.
    pub fn becalmed() -> Self {
        let config = ClothConfig {
            lattice: ClothConfig::small().lattice,
            ..ClothConfig::becalmed()
        };
        Self {
            kind: ScenarioKind::Becalmed,
            config,
            ticks: 100,
            description: "still air, gravity and relaxation only",
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Curtain => Self::curtain(),
            ScenarioKind::CurtainSmall => Self::curtain_small(),
            ScenarioKind::Becalmed => Self::becalmed(),
        }
    }
}
