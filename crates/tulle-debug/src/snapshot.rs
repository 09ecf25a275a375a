//! State snapshot serialization.
//!
//! Snapshots capture the cloth's position history at a point in time,
//! enabling offline inspection and diff-based debugging of runs.

use serde::{Deserialize, Serialize};
use tulle_grid::layout;
use tulle_solver::ClothSim;
use tulle_types::{TulleError, TulleResult};

/// A cloth state snapshot.
///
/// Serialized with `bincode` for compact binary output. Holds both
/// position generations so the implied per-point velocity is visible
/// when diffing snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Tick index when this snapshot was taken.
    pub tick: u64,
    /// Number of lattice points.
    pub point_count: usize,
    /// Gust strength bound at capture time.
    pub wind_range: f32,
    /// Current positions (interleaved: `[x0, y0, x1, y1, ...]`).
    pub positions: Vec<f32>,
    /// Previous positions, same layout.
    pub previous: Vec<f32>,
}

impl StateSnapshot {
    /// Captures the simulation's current state.
    pub fn capture(sim: &ClothSim) -> TulleResult<Self> {
        let state = sim.state();
        let positions = layout::interleave(&state.pos_x, &state.pos_y)?;
        let previous = layout::interleave(&state.prev_x, &state.prev_y)?;
        Ok(Self {
            tick: sim.ticks(),
            point_count: state.point_count,
            wind_range: state.wind_range,
            positions,
            previous,
        })
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> TulleResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| TulleError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> TulleResult<Self> {
        bincode::deserialize(data).map_err(|e| TulleError::Serialization(e.to_string()))
    }

    /// Checks that the position arrays match the recorded point count.
    pub fn validate(&self) -> TulleResult<()> {
        let expected = self.point_count * 2;
        if self.positions.len() != expected || self.previous.len() != expected {
            return Err(TulleError::Serialization(format!(
                "snapshot arrays do not match {} points: {} current, {} previous",
                self.point_count,
                self.positions.len(),
                self.previous.len()
            )));
        }
        Ok(())
    }
}
