//! Iterative spring-constraint relaxation and the pinned-row assert.
//!
//! One relaxation pass sweeps the lattice in row-major order. For each
//! non-pinned point it visits the point's valid links, and wherever a
//! link is stretched past its rest length it moves both endpoints half
//! the excess toward each other. Corrections apply immediately, so
//! later points in the same pass see earlier corrections (Gauss-Seidel
//! sweep); the traversal order is part of the simulation's observable
//! behavior and must not change.
//!
//! Compressed links are left alone. The cloth's springs resist only
//! stretching, which is what lets folds and drape form.

use glam::Vec2;
use tulle_grid::{ClothLattice, Link};

/// One row-major relaxation pass over the position channels.
///
/// Returns the number of link visits skipped because the point-to-
/// neighbor distance was non-finite or the link was degenerate (zero
/// rest length). Skips are a diagnostic, not an error: the pass leaves
/// the offending positions untouched and carries on.
pub fn relax_pass(lattice: &ClothLattice, pos_x: &mut [f32], pos_y: &mut [f32]) -> usize {
    let n = lattice.size();
    let mut skipped = 0;

    for y in 0..n {
        for x in 0..n {
            let i = y * n + x;
            if lattice.is_pinned(i) {
                continue;
            }

            // The point's own position accumulates locally across its
            // links; neighbors are corrected in place.
            let mut p = Vec2::new(pos_x[i], pos_y[i]);
            for link in Link::ALL {
                let Some(j) = lattice.neighbor_index(x, y, link) else {
                    continue;
                };
                let q = Vec2::new(pos_x[j], pos_y[j]);
                let delta = q - p;
                let distance = delta.length();
                let rest = lattice.rest_length(i, link);
                if !distance.is_finite() || rest <= 0.0 {
                    skipped += 1;
                    continue;
                }

                let extra = distance / rest - 1.0;
                if extra > 0.0 {
                    let correction = delta * (0.5 * extra);
                    p += correction;
                    pos_x[j] = q.x - correction.x;
                    pos_y[j] = q.y - correction.y;
                }
            }
            pos_x[i] = p.x;
            pos_y[i] = p.y;
        }
    }

    skipped
}

/// One relaxation pass as two checkerboard half-sweeps.
///
/// Points are colored by `(x + y)` parity; every link joins opposite
/// colors. Each half-sweep visits one color and moves only the visited
/// point (by its half of the excess), never the neighbor, so no two
/// updates within a half-sweep touch the same position. That makes the
/// half-sweep safe to split across workers, at the cost of a different
/// correction schedule than [`relax_pass`]: results converge to the
/// same drape but do not match it value for value.
pub fn relax_pass_colored(lattice: &ClothLattice, pos_x: &mut [f32], pos_y: &mut [f32]) -> usize {
    let n = lattice.size();
    let mut skipped = 0;

    for parity in 0..2 {
        for y in 0..n {
            let mut x = (parity + y) % 2;
            while x < n {
                let i = y * n + x;
                if lattice.is_pinned(i) {
                    x += 2;
                    continue;
                }

                let mut p = Vec2::new(pos_x[i], pos_y[i]);
                for link in Link::ALL {
                    let Some(j) = lattice.neighbor_index(x, y, link) else {
                        continue;
                    };
                    let q = Vec2::new(pos_x[j], pos_y[j]);
                    let delta = q - p;
                    let distance = delta.length();
                    let rest = lattice.rest_length(i, link);
                    if !distance.is_finite() || rest <= 0.0 {
                        skipped += 1;
                        continue;
                    }

                    let extra = distance / rest - 1.0;
                    if extra > 0.0 {
                        p += delta * (0.5 * extra);
                    }
                }
                pos_x[i] = p.x;
                pos_y[i] = p.y;
                x += 2;
            }
        }
    }

    skipped
}

/// Restores every pinned point to its pin target.
///
/// Runs after each relaxation pass. Relaxation moves pinned points like
/// any others (their non-pinned neighbors correct them); the assert is
/// what actually holds the top row in place.
pub fn pin_row(lattice: &ClothLattice, pos_x: &mut [f32], pos_y: &mut [f32]) {
    for i in 0..lattice.point_count() {
        if lattice.is_pinned(i) {
            pos_x[i] = lattice.pinned_x()[i];
            pos_y[i] = lattice.pinned_y()[i];
        }
    }
}

/// Total rest-length violation over all links, each counted once.
///
/// Sums `distance − rest` over every stretched link (undirected: the
/// Right and Down slots cover each link exactly once). Compressed links
/// contribute nothing, matching what the relaxation acts on.
/// Non-finite distances and degenerate links are excluded. The f64
/// accumulator keeps large lattices from losing the small per-link
/// terms.
pub fn stretch_violation(lattice: &ClothLattice, pos_x: &[f32], pos_y: &[f32]) -> f64 {
    let n = lattice.size();
    let mut total = 0.0f64;

    for y in 0..n {
        for x in 0..n {
            let i = y * n + x;
            let p = Vec2::new(pos_x[i], pos_y[i]);
            for link in [Link::Right, Link::Down] {
                let Some(j) = lattice.neighbor_index(x, y, link) else {
                    continue;
                };
                let q = Vec2::new(pos_x[j], pos_y[j]);
                let distance = p.distance(q);
                let rest = lattice.rest_length(i, link);
                if !distance.is_finite() || rest <= 0.0 {
                    continue;
                }
                let excess = f64::from(distance - rest);
                if excess > 0.0 {
                    total += excess;
                }
            }
        }
    }

    total
}
