//! Strongly-typed identifiers for simulation entities.
//!
//! The newtype wrapper keeps flat point indices from mixing with raw
//! loop counters or lane offsets at API boundaries.

use serde::{Deserialize, Serialize};

/// Flat index into the per-point channel arrays (row-major over the
/// lattice: `y * n + x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl PointId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
