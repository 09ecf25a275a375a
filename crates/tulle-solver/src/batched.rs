//! Lane-batched strategy over fixed-width register copies.

use tulle_grid::ClothLattice;
use tulle_types::constants::LANE_WIDTH;
use tulle_types::{TulleError, TulleResult};

use crate::config::ClothConfig;
use crate::integrator::{self, StepForces};
use crate::relax;
use crate::state::ClothState;
use crate::strategy::ExecutionStrategy;

/// Integrates `W` points at a time through `[f32; W]` lane copies, with
/// a scalar tail for the remainder.
///
/// The lane arithmetic keeps the scalar path's association order, so
/// batched results match [`ScalarStrategy`] exactly, tail included.
/// Relaxation defaults to the same row-major Gauss-Seidel sweep; the
/// [`colored`] variant swaps in the checkerboard half-sweeps instead.
///
/// [`ScalarStrategy`]: crate::scalar::ScalarStrategy
/// [`colored`]: BatchedStrategy::colored
#[derive(Debug)]
pub struct BatchedStrategy<const W: usize = { LANE_WIDTH }> {
    colored_relax: bool,
    initialized: bool,
}

impl BatchedStrategy<{ LANE_WIDTH }> {
    /// Creates a strategy with the default lane width.
    pub fn new() -> Self {
        Self::with_lane_width()
    }
}

impl Default for BatchedStrategy<{ LANE_WIDTH }> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> BatchedStrategy<W> {
    /// Creates a strategy batching `W` points per lane.
    pub fn with_lane_width() -> Self {
        Self {
            colored_relax: false,
            initialized: false,
        }
    }

    /// Switches relaxation to the checkerboard half-sweep form, which
    /// trades value-for-value agreement with the scalar sweep for
    /// conflict-free updates within each half-sweep.
    pub fn colored(mut self) -> Self {
        self.colored_relax = true;
        self
    }
}

impl<const W: usize> ExecutionStrategy for BatchedStrategy<W> {
    fn init(&mut self, lattice: &ClothLattice, _config: &ClothConfig) -> TulleResult<()> {
        if W == 0 {
            return Err(TulleError::InvalidConfig(
                "lane width must be at least 1".into(),
            ));
        }
        lattice.validate()?;
        self.initialized = true;
        Ok(())
    }

    fn integrate(&mut self, state: &mut ClothState, forces: &StepForces) -> TulleResult<()> {
        if !self.initialized {
            return Err(TulleError::Uninitialized(
                "batched strategy stepped before init()".into(),
            ));
        }

        for lane in 0..state.pos_x.lane_count::<W>() {
            let mut pos_x = state.pos_x.load_lane::<W>(lane);
            let mut pos_y = state.pos_y.load_lane::<W>(lane);
            let mut prev_x = state.prev_x.load_lane::<W>(lane);
            let mut prev_y = state.prev_y.load_lane::<W>(lane);
            let mut seeds = [0u32; W];
            seeds.copy_from_slice(&state.seeds[lane * W..lane * W + W]);

            integrator::integrate_lane(
                &mut pos_x, &mut pos_y, &mut prev_x, &mut prev_y, &mut seeds, forces,
            );

            state.pos_x.store_lane(lane, pos_x);
            state.pos_y.store_lane(lane, pos_y);
            state.prev_x.store_lane(lane, prev_x);
            state.prev_y.store_lane(lane, prev_y);
            state.seeds[lane * W..lane * W + W].copy_from_slice(&seeds);
        }

        for i in state.pos_x.lane_tail::<W>()..state.point_count {
            integrator::integrate_point(
                i,
                state.pos_x.as_mut_slice(),
                state.pos_y.as_mut_slice(),
                state.prev_x.as_mut_slice(),
                state.prev_y.as_mut_slice(),
                &mut state.seeds,
                forces,
            );
        }
        Ok(())
    }

    fn relax(&mut self, lattice: &ClothLattice, state: &mut ClothState) -> TulleResult<usize> {
        if !self.initialized {
            return Err(TulleError::Uninitialized(
                "batched strategy stepped before init()".into(),
            ));
        }
        let skipped = if self.colored_relax {
            relax::relax_pass_colored(
                lattice,
                state.pos_x.as_mut_slice(),
                state.pos_y.as_mut_slice(),
            )
        } else {
            relax::relax_pass(
                lattice,
                state.pos_x.as_mut_slice(),
                state.pos_y.as_mut_slice(),
            )
        };
        Ok(skipped)
    }

    fn name(&self) -> &str {
        if self.colored_relax {
            "batched_colored"
        } else {
            "batched"
        }
    }
}
