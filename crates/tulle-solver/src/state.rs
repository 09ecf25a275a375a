//! Mutable per-run simulation state.

use tulle_grid::{Channel, ClothLattice};
use tulle_types::{TulleError, TulleResult};

use crate::config::ClothConfig;

/// Everything that changes while a simulation runs.
///
/// The lattice (topology, pins, rest lengths) stays immutable; the
/// state carries the position channels, the per-point random streams,
/// and the growing gust bound. Execution strategies mutate the state
/// in place and never allocate per step.
#[derive(Debug, Clone, PartialEq)]
pub struct ClothState {
    /// Number of points; matches the lattice the state was built from.
    pub point_count: usize,
    /// Current X positions.
    pub pos_x: Channel,
    /// Current Y positions.
    pub pos_y: Channel,
    /// X positions one sub-step ago.
    pub prev_x: Channel,
    /// Y positions one sub-step ago.
    pub prev_y: Channel,
    /// Per-point random stream states, advanced by the integrator.
    pub seeds: Vec<u32>,
    /// Current horizontal gust bound; grows once per sub-step.
    pub wind_range: f32,
}

impl ClothState {
    /// Builds the initial state for a lattice: positions at the seeded
    /// layout, previous positions equal to current (zero velocity), and
    /// random streams continued from where seeding left them.
    pub fn from_lattice(lattice: &ClothLattice, config: &ClothConfig) -> TulleResult<Self> {
        if !lattice.rest_ready() {
            return Err(TulleError::Uninitialized(
                "lattice rest lengths are not initialized".into(),
            ));
        }
        let pos_x = Channel::from_vec(lattice.initial_x().to_vec());
        let pos_y = Channel::from_vec(lattice.initial_y().to_vec());
        Ok(Self {
            point_count: lattice.point_count(),
            prev_x: pos_x.clone(),
            prev_y: pos_y.clone(),
            pos_x,
            pos_y,
            seeds: lattice.stream_states().to_vec(),
            wind_range: config.wind_base_range,
        })
    }
}
