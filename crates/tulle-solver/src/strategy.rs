//! The execution-strategy seam.
//!
//! A strategy owns *how* the fixed protocol runs (scalar loop, lane
//! batches, offload channel), never *what* it computes. [`ClothSim`]
//! drives the protocol and calls the strategy for its two phases, so
//! swapping strategies cannot change sub-step structure, pass counts,
//! or results.
//!
//! [`ClothSim`]: crate::sim::ClothSim

use tulle_grid::ClothLattice;
use tulle_types::TulleResult;

use crate::config::ClothConfig;
use crate::integrator::StepForces;
use crate::state::ClothState;

/// What one tick did: the protocol counts, the skip diagnostic, and
/// wall time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Sub-steps executed (the protocol constant).
    pub sub_steps: u32,
    /// Total relaxation passes across all sub-steps.
    pub relax_passes: u32,
    /// Link visits skipped for non-finite or degenerate geometry.
    pub skipped_links: u64,
    /// Wall-clock seconds the tick took.
    pub wall_time: f64,
}

/// One way of executing the simulation protocol.
///
/// Implementations must be initialized once before stepping and must
/// produce results identical to [`ScalarStrategy`] for the default
/// relaxation schedule; the strategy seam exists so the physical
/// layout and execution can change without the simulation noticing.
///
/// [`ScalarStrategy`]: crate::scalar::ScalarStrategy
pub trait ExecutionStrategy: Send {
    /// Prepares the strategy for a lattice. Called once by the
    /// simulation before the first tick.
    fn init(&mut self, lattice: &ClothLattice, config: &ClothConfig) -> TulleResult<()>;

    /// Runs one integration sub-step over every point.
    fn integrate(&mut self, state: &mut ClothState, forces: &StepForces) -> TulleResult<()>;

    /// Runs one relaxation pass; returns the skipped-link count.
    fn relax(&mut self, lattice: &ClothLattice, state: &mut ClothState) -> TulleResult<usize>;

    /// Returns the strategy name (e.g., "scalar", "batched").
    fn name(&self) -> &str;
}
