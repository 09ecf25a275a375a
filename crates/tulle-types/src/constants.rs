//! Tuning defaults and fixed protocol constants.

use crate::scalar::Scalar;

/// Grid side length of the default curtain (points per axis).
pub const DEFAULT_GRID_SIZE: usize = 256;

/// Sub-steps per simulation tick. Part of the fixed step protocol,
/// never a runtime knob.
pub const SUB_STEPS: u32 = 3;

/// Relaxation passes per sub-step. Part of the fixed step protocol,
/// never a runtime knob.
pub const RELAX_PASSES: u32 = 4;

/// Lane width of the batched execution strategy (points per lane).
pub const LANE_WIDTH: usize = 8;

/// Rest-length slack: springs start resisting at 115% of seeded distance.
pub const DEFAULT_REST_SLACK: Scalar = 1.15;

/// Per-sub-step acceleration of the default tuning (x, y). Y grows
/// downward in surface coordinates.
pub const DEFAULT_GRAVITY: [Scalar; 2] = [0.0, 0.003];

/// Gust chance per point per sub-step, compared against a unit draw.
pub const DEFAULT_WIND_PROBABILITY: Scalar = 0.03;

/// Initial bound of the horizontal gust impulse.
pub const DEFAULT_WIND_BASE_RANGE: Scalar = 0.13;

/// Growth of the horizontal gust bound, applied once per sub-step.
pub const DEFAULT_WIND_GROWTH: Scalar = 2.0e-4;

/// Bound of the vertical gust impulse. Does not grow.
pub const DEFAULT_WIND_VERTICAL: Scalar = 0.12;

/// Drawing-surface dimensions the default curtain is laid out for.
pub const DEFAULT_SURFACE_WIDTH: Scalar = 1280.0;
/// See [`DEFAULT_SURFACE_WIDTH`].
pub const DEFAULT_SURFACE_HEIGHT: Scalar = 720.0;

/// Offset of the lattice origin from the surface corner, both axes.
pub const SEED_ORIGIN: Scalar = 10.0;

/// Horizontal surface margin excluded from the lattice span.
pub const SEED_MARGIN_X: Scalar = 100.0;

/// Vertical surface margin excluded from the lattice span.
pub const SEED_MARGIN_Y: Scalar = 180.0;

/// Horizontal shear per row in the seeding formula.
pub const SEED_ROW_SHEAR: Scalar = 0.9;

/// Upper bound (exclusive) of the seeding jitter, both axes.
pub const JITTER_MAX: Scalar = 2.0;

/// Epsilon for floating-point comparisons in tests and validation.
pub const EPSILON: Scalar = 1.0e-6;
