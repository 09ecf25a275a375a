//! Line-segment enumeration of the cloth lattice.
//!
//! The curtain is drawn as its spring links. Each link appears once:
//! the right and down links of every point, as index pairs into the
//! row-major position channels. Rasterization is the consumer's job;
//! this module only says which points connect.

/// The line segments of an n×n lattice.
pub struct WireframeLayout {
    size: usize,
    segments: Vec<[u32; 2]>,
}

impl WireframeLayout {
    /// Enumerates the segments of an `size × size` grid.
    ///
    /// Every segment `[a, b]` has `a < b`, and an n×n grid yields
    /// exactly `2·n·(n−1)` segments.
    pub fn for_grid(size: usize) -> Self {
        let mut segments = Vec::with_capacity(2 * size * size.saturating_sub(1));
        for y in 0..size {
            for x in 0..size {
                let i = (y * size + x) as u32;
                if x + 1 < size {
                    segments.push([i, i + 1]);
                }
                if y + 1 < size {
                    segments.push([i, i + size as u32]);
                }
            }
        }
        Self { size, segments }
    }

    /// Grid side length the layout was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The segments as index pairs.
    pub fn segments(&self) -> &[[u32; 2]] {
        &self.segments
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
