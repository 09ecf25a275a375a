//! Position-Verlet integration with stochastic wind gusts.
//!
//! One integration step per point and sub-step:
//!
//! ```text
//! next = current + (current − previous) + gravity
//! if unit_draw < wind_probability {
//!     next.x += bounded_draw(wind_range)
//!     next.y += bounded_draw(wind_vertical)
//! }
//! previous = current          (the un-impulsed value)
//! position = next
//! ```
//!
//! The gust lands after the Verlet update and only on the new position,
//! so the impulse carries into the next sub-step's implied velocity.
//! Every point takes exactly one unit draw per sub-step and two bounded
//! draws when the gust fires; the draw discipline is part of the
//! contract, because stream states advance with the draws and every
//! execution strategy must leave them identical.
//!
//! Pinned points integrate like any other point. The relaxation phase
//! re-asserts their targets, which keeps the integration kernel
//! uniform and branch-free over the point index.

use tulle_types::rng;

use crate::config::ClothConfig;

/// The force parameters of one sub-step, with the gust bound already
/// resolved to its current grown value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepForces {
    /// Constant acceleration (x, y).
    pub gravity: [f32; 2],
    /// Gust chance per point, against a unit draw.
    pub wind_probability: f32,
    /// Current horizontal gust bound.
    pub wind_range: f32,
    /// Vertical gust bound.
    pub wind_vertical: f32,
}

impl StepForces {
    /// Resolves the forces for a sub-step from the configuration and
    /// the current gust bound.
    pub fn resolve(config: &ClothConfig, wind_range: f32) -> Self {
        Self {
            gravity: config.gravity,
            wind_probability: config.wind_probability,
            wind_range,
            wind_vertical: config.wind_vertical,
        }
    }
}

/// Integrates the single point `i` in place.
///
/// The expression shape here is the reference for every other
/// execution path: same association order, same draw order. The
/// offload channel's kernel and the lane-batched form reproduce it
/// value for value.
#[inline]
pub fn integrate_point(
    i: usize,
    pos_x: &mut [f32],
    pos_y: &mut [f32],
    prev_x: &mut [f32],
    prev_y: &mut [f32],
    seeds: &mut [u32],
    forces: &StepForces,
) {
    let current_x = pos_x[i];
    let current_y = pos_y[i];
    let mut next_x = current_x + (current_x - prev_x[i]) + forces.gravity[0];
    let mut next_y = current_y + (current_y - prev_y[i]) + forces.gravity[1];

    let mut stream = seeds[i];
    if rng::next_unit(&mut stream) < forces.wind_probability {
        next_x += rng::next_bounded(&mut stream, forces.wind_range);
        next_y += rng::next_bounded(&mut stream, forces.wind_vertical);
    }
    seeds[i] = stream;

    pos_x[i] = next_x;
    pos_y[i] = next_y;
    prev_x[i] = current_x;
    prev_y[i] = current_y;
}

/// Integrates every point of the flat channels in index order.
///
/// Point results are independent of traversal order; only each point's
/// own stream state feeds its draws.
pub fn integrate_span(
    pos_x: &mut [f32],
    pos_y: &mut [f32],
    prev_x: &mut [f32],
    prev_y: &mut [f32],
    seeds: &mut [u32],
    forces: &StepForces,
) {
    debug_assert_eq!(pos_x.len(), seeds.len());
    for i in 0..pos_x.len() {
        integrate_point(i, pos_x, pos_y, prev_x, prev_y, seeds, forces);
    }
}

/// Integrates one `W`-wide lane of points in place.
///
/// The draws run per element first (each point consumes its own stream
/// in the scalar draw order), leaving a gust impulse of zero where no
/// gust fired. The arithmetic then runs as one straight elementwise
/// pass over the lane, which the compiler can vectorize. Adding the
/// zero impulse keeps the association order identical to
/// [`integrate_point`], so lane and scalar results match exactly.
pub fn integrate_lane<const W: usize>(
    pos_x: &mut [f32; W],
    pos_y: &mut [f32; W],
    prev_x: &mut [f32; W],
    prev_y: &mut [f32; W],
    seeds: &mut [u32; W],
    forces: &StepForces,
) {
    let mut gust_x = [0.0f32; W];
    let mut gust_y = [0.0f32; W];
    for l in 0..W {
        let mut stream = seeds[l];
        if rng::next_unit(&mut stream) < forces.wind_probability {
            gust_x[l] = rng::next_bounded(&mut stream, forces.wind_range);
            gust_y[l] = rng::next_bounded(&mut stream, forces.wind_vertical);
        }
        seeds[l] = stream;
    }

    for l in 0..W {
        let current_x = pos_x[l];
        let current_y = pos_y[l];
        pos_x[l] = current_x + (current_x - prev_x[l]) + forces.gravity[0] + gust_x[l];
        pos_y[l] = current_y + (current_y - prev_y[l]) + forces.gravity[1] + gust_y[l];
        prev_x[l] = current_x;
        prev_y[l] = current_y;
    }
}
