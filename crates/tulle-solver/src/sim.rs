//! The simulation driver: owns lattice, state, and strategy, and runs
//! the fixed step protocol.

use std::time::Instant;

use tulle_grid::ClothLattice;
use tulle_types::constants::{RELAX_PASSES, SUB_STEPS};
use tulle_types::{TulleError, TulleResult};

use crate::config::ClothConfig;
use crate::integrator::StepForces;
use crate::relax;
use crate::state::ClothState;
use crate::strategy::{ExecutionStrategy, StepReport};

/// A running cloth simulation.
///
/// One tick is always the same protocol, regardless of strategy:
///
/// ```text
/// 3 × [ integrate → grow gust bound → 4 × (relax pass → pin assert) ]
/// ```
///
/// The strategy executes the two phases; the driver owns the ordering
/// and the counts. Nothing in the protocol depends on wall time, so a
/// run is a pure function of configuration and seed.
pub struct ClothSim {
    lattice: ClothLattice,
    state: ClothState,
    config: ClothConfig,
    strategy: Box<dyn ExecutionStrategy>,
    ticks: u64,
}

impl ClothSim {
    /// Generates the lattice from the configuration and builds a ready
    /// simulation around it.
    pub fn new(config: ClothConfig, strategy: Box<dyn ExecutionStrategy>) -> TulleResult<Self> {
        config.validate()?;
        let lattice = ClothLattice::generate(&config.lattice, config.seed)?;
        Self::with_lattice(lattice, config, strategy)
    }

    /// Builds a simulation around a caller-provided lattice, e.g. a
    /// [`regular`] reference grid. The config's `lattice` field is not
    /// consulted in this path; the provided lattice is used as-is.
    ///
    /// [`regular`]: ClothLattice::regular
    pub fn with_lattice(
        lattice: ClothLattice,
        config: ClothConfig,
        mut strategy: Box<dyn ExecutionStrategy>,
    ) -> TulleResult<Self> {
        config.validate()?;
        let state = ClothState::from_lattice(&lattice, &config)?;
        strategy.init(&lattice, &config)?;
        Ok(Self {
            lattice,
            state,
            config,
            strategy,
            ticks: 0,
        })
    }

    /// Advances the simulation by one full tick.
    pub fn tick(&mut self) -> TulleResult<StepReport> {
        let start = Instant::now();
        let mut skipped: u64 = 0;

        for _ in 0..SUB_STEPS {
            let forces = StepForces::resolve(&self.config, self.state.wind_range);
            self.strategy.integrate(&mut self.state, &forces)?;
            self.state.wind_range += self.config.wind_growth;

            for _ in 0..RELAX_PASSES {
                skipped += self.strategy.relax(&self.lattice, &mut self.state)? as u64;
                relax::pin_row(
                    &self.lattice,
                    self.state.pos_x.as_mut_slice(),
                    self.state.pos_y.as_mut_slice(),
                );
            }
        }

        self.ticks += 1;
        Ok(StepReport {
            sub_steps: SUB_STEPS,
            relax_passes: SUB_STEPS * RELAX_PASSES,
            skipped_links: skipped,
            wall_time: start.elapsed().as_secs_f64(),
        })
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The immutable lattice.
    pub fn lattice(&self) -> &ClothLattice {
        &self.lattice
    }

    /// The mutable simulation state.
    pub fn state(&self) -> &ClothState {
        &self.state
    }

    /// The run configuration.
    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    /// Name of the executing strategy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Current positions as `(x, y)` channel slices.
    pub fn positions(&self) -> (&[f32], &[f32]) {
        (self.state.pos_x.as_slice(), self.state.pos_y.as_slice())
    }

    /// Total stretch excess over all links at the current positions.
    pub fn stretch_violation(&self) -> f64 {
        relax::stretch_violation(
            &self.lattice,
            self.state.pos_x.as_slice(),
            self.state.pos_y.as_slice(),
        )
    }

    /// Replaces the mutable state wholesale, as when restoring a
    /// captured snapshot. The lattice and strategy stay as initialized,
    /// so the state must match the lattice's point count.
    pub fn restore_state(&mut self, state: ClothState, ticks: u64) -> TulleResult<()> {
        let count = self.lattice.point_count();
        if state.point_count != count
            || state.pos_x.len() != count
            || state.pos_y.len() != count
            || state.prev_x.len() != count
            || state.prev_y.len() != count
            || state.seeds.len() != count
        {
            return Err(TulleError::InvalidLattice(format!(
                "restored state does not match the {count}-point lattice"
            )));
        }
        self.state = state;
        self.ticks = ticks;
        Ok(())
    }
}
