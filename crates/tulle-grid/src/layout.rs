//! Physical layout views over per-point data.
//!
//! The same backing storage serves three consumers:
//! - scalar loops read the flat slice view,
//! - the lane-batched integrator loads and stores fixed-width
//!   `[f32; W]` registers,
//! - the offloaded strategy copies whole buffers across the compute
//!   boundary.
//!
//! [`PointRecord`] re-assembles the record-oriented (AoS) view of one
//! point, and the interleave helpers convert between paired and
//! columnar storage. Every view addresses points by the same row-major
//! flat index, so layout never changes a neighbor lookup.

use serde::{Deserialize, Serialize};
use tulle_types::{TulleError, TulleResult};

use crate::lattice::ClothLattice;
use crate::topology::Link;

/// One f32 value per point, stored contiguously in row-major point order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    data: Vec<f32>,
}

impl Channel {
    /// Creates a zero-filled channel for `len` points.
    pub fn zeros(len: usize) -> Self {
        Self { data: vec![0.0; len] }
    }

    /// Wraps an existing buffer.
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the channel holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat scalar view.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable flat scalar view.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Number of full `W`-wide lanes. Points past the last full lane
    /// are the scalar tail, reachable from [`lane_tail`].
    ///
    /// [`lane_tail`]: Channel::lane_tail
    #[inline]
    pub fn lane_count<const W: usize>(&self) -> usize {
        self.data.len() / W
    }

    /// First index after the full lanes; start of the scalar tail.
    #[inline]
    pub fn lane_tail<const W: usize>(&self) -> usize {
        self.lane_count::<W>() * W
    }

    /// Loads lane `lane` as a fixed-width register-style copy.
    #[inline]
    pub fn load_lane<const W: usize>(&self, lane: usize) -> [f32; W] {
        let mut out = [0.0; W];
        out.copy_from_slice(&self.data[lane * W..lane * W + W]);
        out
    }

    /// Stores a fixed-width value back into lane `lane`.
    #[inline]
    pub fn store_lane<const W: usize>(&mut self, lane: usize, values: [f32; W]) {
        self.data[lane * W..lane * W + W].copy_from_slice(&values);
    }
}

impl std::ops::Index<usize> for Channel {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.data[i]
    }
}

impl std::ops::IndexMut<usize> for Channel {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.data[i]
    }
}

/// The record-oriented (AoS) view of one lattice point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    /// Current position.
    pub position: [f32; 2],
    /// Position one sub-step ago.
    pub previous: [f32; 2],
    /// Whether the point is pinned.
    pub pinned: bool,
    /// Pin target; meaningful only when `pinned`.
    pub pinned_position: [f32; 2],
    /// Rest length per link, in [`Link`] slot order.
    pub rest_length: [f32; 4],
}

/// Gathers the full record of point `i` from columnar storage.
pub fn gather_record(
    lattice: &ClothLattice,
    pos_x: &Channel,
    pos_y: &Channel,
    prev_x: &Channel,
    prev_y: &Channel,
    i: usize,
) -> PointRecord {
    PointRecord {
        position: [pos_x[i], pos_y[i]],
        previous: [prev_x[i], prev_y[i]],
        pinned: lattice.is_pinned(i),
        pinned_position: [lattice.pinned_x()[i], lattice.pinned_y()[i]],
        rest_length: [
            lattice.rest_length(i, Link::Right),
            lattice.rest_length(i, Link::Left),
            lattice.rest_length(i, Link::Down),
            lattice.rest_length(i, Link::Up),
        ],
    }
}

/// Scatters the mutable half of a record (position and previous) back
/// into columnar storage. Pins and rest lengths are immutable lattice
/// data and are not written.
pub fn scatter_record(
    record: &PointRecord,
    pos_x: &mut Channel,
    pos_y: &mut Channel,
    prev_x: &mut Channel,
    prev_y: &mut Channel,
    i: usize,
) {
    pos_x[i] = record.position[0];
    pos_y[i] = record.position[1];
    prev_x[i] = record.previous[0];
    prev_y[i] = record.previous[1];
}

/// Splits interleaved `[x0, y0, x1, y1, ...]` pairs into two channels.
pub fn channels_from_interleaved(pairs: &[f32]) -> TulleResult<(Channel, Channel)> {
    if pairs.len() % 2 != 0 {
        return Err(TulleError::InvalidLattice(format!(
            "interleaved pair array has odd length {}",
            pairs.len()
        )));
    }
    let count = pairs.len() / 2;
    let mut xs = Vec::with_capacity(count);
    let mut ys = Vec::with_capacity(count);
    for pair in pairs.chunks_exact(2) {
        xs.push(pair[0]);
        ys.push(pair[1]);
    }
    Ok((Channel::from_vec(xs), Channel::from_vec(ys)))
}

/// Interleaves two channels into `[x0, y0, x1, y1, ...]` pairs.
pub fn interleave(xs: &Channel, ys: &Channel) -> TulleResult<Vec<f32>> {
    if xs.len() != ys.len() {
        return Err(TulleError::InvalidLattice(format!(
            "channel lengths disagree: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    let mut pairs = Vec::with_capacity(xs.len() * 2);
    for i in 0..xs.len() {
        pairs.push(xs[i]);
        pairs.push(ys[i]);
    }
    Ok(pairs)
}
