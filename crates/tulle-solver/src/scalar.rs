//! Scalar reference strategy.

use tulle_grid::ClothLattice;
use tulle_types::{TulleError, TulleResult};

use crate::config::ClothConfig;
use crate::integrator::{self, StepForces};
use crate::relax;
use crate::state::ClothState;
use crate::strategy::ExecutionStrategy;

/// The plain point-at-a-time execution of the protocol.
///
/// One flat loop for integration, one row-major Gauss-Seidel sweep for
/// relaxation. Every other strategy is measured against this one.
#[derive(Debug)]
pub struct ScalarStrategy {
    initialized: bool,
}

impl ScalarStrategy {
    /// Creates a new scalar strategy (uninitialized).
    pub fn new() -> Self {
        Self { initialized: false }
    }
}

impl Default for ScalarStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionStrategy for ScalarStrategy {
    fn init(&mut self, lattice: &ClothLattice, _config: &ClothConfig) -> TulleResult<()> {
        lattice.validate()?;
        self.initialized = true;
        Ok(())
    }

    fn integrate(&mut self, state: &mut ClothState, forces: &StepForces) -> TulleResult<()> {
        if !self.initialized {
            return Err(TulleError::Uninitialized(
                "scalar strategy stepped before init()".into(),
            ));
        }
        integrator::integrate_span(
            state.pos_x.as_mut_slice(),
            state.pos_y.as_mut_slice(),
            state.prev_x.as_mut_slice(),
            state.prev_y.as_mut_slice(),
            &mut state.seeds,
            forces,
        );
        Ok(())
    }

    fn relax(&mut self, lattice: &ClothLattice, state: &mut ClothState) -> TulleResult<usize> {
        if !self.initialized {
            return Err(TulleError::Uninitialized(
                "scalar strategy stepped before init()".into(),
            ));
        }
        Ok(relax::relax_pass(
            lattice,
            state.pos_x.as_mut_slice(),
            state.pos_y.as_mut_slice(),
        ))
    }

    fn name(&self) -> &str {
        "scalar"
    }
}
