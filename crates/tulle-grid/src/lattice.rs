//! The cloth lattice: seeded point grid, pinned top row, rest lengths.
//!
//! The lattice is built once at startup and is immutable afterwards:
//! only the solver's position channels mutate during a run. Rest lengths
//! live here because they are derived from the seeded layout and shared
//! by every execution strategy.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tulle_types::constants::{
    DEFAULT_GRID_SIZE, DEFAULT_REST_SLACK, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH,
    JITTER_MAX, SEED_MARGIN_X, SEED_MARGIN_Y, SEED_ORIGIN, SEED_ROW_SHEAR,
};
use tulle_types::{rng, PointId, TulleError, TulleResult};

use crate::topology::{neighbor, Link};

/// Construction parameters of a cloth lattice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatticeParams {
    /// Points per axis; the grid is `size × size`.
    pub size: usize,
    /// Width of the drawing surface the cloth is laid out for.
    pub surface_width: f32,
    /// Height of the drawing surface the cloth is laid out for.
    pub surface_height: f32,
    /// Rest-length slack factor applied to seeded link distances.
    pub rest_slack: f32,
}

impl Default for LatticeParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            rest_slack: DEFAULT_REST_SLACK,
        }
    }
}

impl LatticeParams {
    /// Validates the parameters.
    ///
    /// The surface must leave room for the layout margins, and the grid
    /// needs at least 2 points per axis so that links exist.
    pub fn validate(&self) -> TulleResult<()> {
        if self.size < 2 {
            return Err(TulleError::InvalidLattice(format!(
                "side length {} is below the 2-point minimum",
                self.size
            )));
        }
        if !(self.surface_width > SEED_MARGIN_X) {
            return Err(TulleError::InvalidLattice(format!(
                "surface width {} does not clear the {SEED_MARGIN_X} margin",
                self.surface_width
            )));
        }
        if !(self.surface_height > SEED_MARGIN_Y) {
            return Err(TulleError::InvalidLattice(format!(
                "surface height {} does not clear the {SEED_MARGIN_Y} margin",
                self.surface_height
            )));
        }
        if !(self.rest_slack > 0.0) {
            return Err(TulleError::InvalidLattice(format!(
                "rest slack {} must be positive",
                self.rest_slack
            )));
        }
        Ok(())
    }

    /// Horizontal spacing between columns.
    fn spacing_x(&self) -> f32 {
        (self.surface_width - SEED_MARGIN_X) / self.size as f32
    }

    /// Vertical spacing between rows.
    fn spacing_y(&self) -> f32 {
        (self.surface_height - SEED_MARGIN_Y) / self.size as f32
    }
}

/// An N×N cloth lattice with seeded positions, a pinned top row, and
/// per-link rest lengths.
///
/// Fields are private: topology, pins, and rest lengths never change
/// after initialization. Points are addressed row-major, `y * n + x`.
#[derive(Debug, Clone)]
pub struct ClothLattice {
    size: usize,
    rest_slack: f32,

    // Seeded initial positions (the solver copies these into its
    // mutable channels).
    pos_x: Vec<f32>,
    pos_y: Vec<f32>,

    // Pinned row data. Targets are meaningful only where pinned.
    pinned: Vec<bool>,
    pin_x: Vec<f32>,
    pin_y: Vec<f32>,

    // Per-point rest lengths, one slot per Link. Absent links hold 0.0
    // and are never read (neighbor lookups gate them).
    rest: Vec<[f32; 4]>,

    // Per-point random stream states after the seeding draws, so the
    // solver continues each point's stream instead of restarting it.
    streams: Vec<u32>,

    rest_ready: bool,
}

impl ClothLattice {
    /// Seeds a lattice from the deterministic layout formula plus
    /// per-point jitter drawn from each point's own random stream.
    ///
    /// The top row (y = 0) is pinned at its seeded position. Rest
    /// lengths are not computed yet; call [`initialize_rest_lengths`]
    /// (or use [`generate`]) before simulating.
    ///
    /// [`initialize_rest_lengths`]: ClothLattice::initialize_rest_lengths
    /// [`generate`]: ClothLattice::generate
    pub fn seed(params: &LatticeParams, run_seed: u64) -> TulleResult<Self> {
        params.validate()?;

        let n = params.size;
        let count = n * n;
        let sx = params.spacing_x();
        let sy = params.spacing_y();

        let mut pos_x = Vec::with_capacity(count);
        let mut pos_y = Vec::with_capacity(count);
        let mut pinned = Vec::with_capacity(count);
        let mut pin_x = Vec::with_capacity(count);
        let mut pin_y = Vec::with_capacity(count);
        let mut streams = Vec::with_capacity(count);

        for y in 0..n {
            for x in 0..n {
                let i = y * n + x;
                let mut stream = rng::seed_stream(run_seed, i as u32);
                let jitter_x = rng::next_bounded(&mut stream, JITTER_MAX);
                let jitter_y = rng::next_bounded(&mut stream, JITTER_MAX);

                pos_x.push(SEED_ORIGIN + x as f32 * sx + y as f32 * SEED_ROW_SHEAR + jitter_x);
                pos_y.push(SEED_ORIGIN + y as f32 * sy + jitter_y);
                streams.push(stream);

                let pin = y == 0;
                pinned.push(pin);
                pin_x.push(if pin { pos_x[i] } else { 0.0 });
                pin_y.push(if pin { pos_y[i] } else { 0.0 });
            }
        }

        Ok(Self {
            size: n,
            rest_slack: params.rest_slack,
            pos_x,
            pos_y,
            pinned,
            pin_x,
            pin_y,
            rest: vec![[0.0; 4]; count],
            streams,
            rest_ready: false,
        })
    }

    /// Computes rest lengths for every valid link of every point as
    /// `rest_slack ×` the seeded point-to-neighbor distance.
    ///
    /// Must run after seeding and before any simulation step. Calling it
    /// again recomputes and silently replaces the previous values, which
    /// is harmless because the seeded positions are fixed at startup.
    pub fn initialize_rest_lengths(&mut self) {
        let n = self.size;
        for y in 0..n {
            for x in 0..n {
                let i = y * n + x;
                let p = Vec2::new(self.pos_x[i], self.pos_y[i]);
                let mut rest = [0.0f32; 4];
                for link in Link::ALL {
                    if let Some((nx, ny)) = neighbor(n, x, y, link) {
                        let j = ny * n + nx;
                        let q = Vec2::new(self.pos_x[j], self.pos_y[j]);
                        rest[link.slot()] = self.rest_slack * p.distance(q);
                    }
                }
                self.rest[i] = rest;
            }
        }
        self.rest_ready = true;
    }

    /// Seeds a lattice and initializes its rest lengths in one call.
    pub fn generate(params: &LatticeParams, run_seed: u64) -> TulleResult<Self> {
        let mut lattice = Self::seed(params, run_seed)?;
        lattice.initialize_rest_lengths();
        Ok(lattice)
    }

    /// Builds an exact regular lattice: points at `(x·spacing, y·spacing)`
    /// with no jitter, and every valid link's rest length set to
    /// `rest_length` directly.
    ///
    /// Reference grids for convergence measurements and reproducibility
    /// tests, where hand-checkable geometry matters more than the seeded
    /// layout. Rest lengths are ready immediately.
    pub fn regular(size: usize, spacing: f32, rest_length: f32) -> TulleResult<Self> {
        if size < 2 {
            return Err(TulleError::InvalidLattice(format!(
                "side length {size} is below the 2-point minimum"
            )));
        }
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(TulleError::InvalidLattice(format!(
                "spacing {spacing} must be positive and finite"
            )));
        }
        if !(rest_length > 0.0 && rest_length.is_finite()) {
            return Err(TulleError::InvalidLattice(format!(
                "rest length {rest_length} must be positive and finite"
            )));
        }

        let count = size * size;
        let mut pos_x = Vec::with_capacity(count);
        let mut pos_y = Vec::with_capacity(count);
        let mut pinned = Vec::with_capacity(count);
        let mut pin_x = Vec::with_capacity(count);
        let mut pin_y = Vec::with_capacity(count);
        let mut streams = Vec::with_capacity(count);
        let mut rest = Vec::with_capacity(count);

        for y in 0..size {
            for x in 0..size {
                let i = y * size + x;
                pos_x.push(x as f32 * spacing);
                pos_y.push(y as f32 * spacing);
                streams.push(rng::seed_stream(0, i as u32));

                let pin = y == 0;
                pinned.push(pin);
                pin_x.push(if pin { pos_x[i] } else { 0.0 });
                pin_y.push(if pin { pos_y[i] } else { 0.0 });

                let mut slots = [0.0f32; 4];
                for link in Link::ALL {
                    if neighbor(size, x, y, link).is_some() {
                        slots[link.slot()] = rest_length;
                    }
                }
                rest.push(slots);
            }
        }

        Ok(Self {
            size,
            rest_slack: 1.0,
            pos_x,
            pos_y,
            pinned,
            pin_x,
            pin_y,
            rest,
            streams,
            rest_ready: true,
        })
    }

    /// Points per axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of points (`size²`).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Whether rest lengths have been initialized.
    #[inline]
    pub fn rest_ready(&self) -> bool {
        self.rest_ready
    }

    /// Flat id of the point at (x, y).
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> PointId {
        PointId((y * self.size + x) as u32)
    }

    /// Grid coordinates of a flat id.
    #[inline]
    pub fn coords_of(&self, id: PointId) -> (usize, usize) {
        let i = id.index();
        (i % self.size, i / self.size)
    }

    /// Neighbor of (x, y) along `link`, or `None` at the border.
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, link: Link) -> Option<(usize, usize)> {
        neighbor(self.size, x, y, link)
    }

    /// Flat index of the neighbor of (x, y) along `link`.
    #[inline]
    pub fn neighbor_index(&self, x: usize, y: usize, link: Link) -> Option<usize> {
        self.neighbor(x, y, link).map(|(nx, ny)| ny * self.size + nx)
    }

    /// Whether point `i` is pinned.
    #[inline]
    pub fn is_pinned(&self, i: usize) -> bool {
        self.pinned[i]
    }

    /// Pinned flags for all points.
    #[inline]
    pub fn pinned(&self) -> &[bool] {
        &self.pinned
    }

    /// Pinned target X coordinates (zero where unpinned).
    #[inline]
    pub fn pinned_x(&self) -> &[f32] {
        &self.pin_x
    }

    /// Pinned target Y coordinates (zero where unpinned).
    #[inline]
    pub fn pinned_y(&self) -> &[f32] {
        &self.pin_y
    }

    /// Rest length of point `i` along `link`. Zero for absent links,
    /// which neighbor lookups already exclude.
    #[inline]
    pub fn rest_length(&self, i: usize, link: Link) -> f32 {
        self.rest[i][link.slot()]
    }

    /// Seeded initial X positions.
    #[inline]
    pub fn initial_x(&self) -> &[f32] {
        &self.pos_x
    }

    /// Seeded initial Y positions.
    #[inline]
    pub fn initial_y(&self) -> &[f32] {
        &self.pos_y
    }

    /// Per-point random stream states after the seeding draws.
    #[inline]
    pub fn stream_states(&self) -> &[u32] {
        &self.streams
    }

    /// Validates internal consistency: all per-point arrays share one
    /// length, and that length is `size²`.
    pub fn validate(&self) -> TulleResult<()> {
        let count = self.size * self.size;
        if self.pos_x.len() != count
            || self.pos_y.len() != count
            || self.pinned.len() != count
            || self.pin_x.len() != count
            || self.pin_y.len() != count
            || self.rest.len() != count
            || self.streams.len() != count
        {
            return Err(TulleError::InvalidLattice(format!(
                "per-point arrays disagree with size {}²",
                self.size
            )));
        }
        for (i, &pin) in self.pinned.iter().enumerate() {
            if pin != (i < self.size) {
                return Err(TulleError::InvalidLattice(format!(
                    "pin flag at index {i} does not match the top-row rule"
                )));
            }
        }
        Ok(())
    }
}
