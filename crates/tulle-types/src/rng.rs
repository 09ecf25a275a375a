//! Deterministic per-point random streams.
//!
//! Every point owns an explicit `u32` xorshift32 state, advanced only by
//! its own draws. Streams are independent across points, so traversal
//! order never changes an outcome, and the state array marshals across
//! the compute-offload boundary as plain data.

/// Advances an xorshift32 state and returns a uniform draw in `[0, 1)`.
#[inline]
pub fn next_unit(state: &mut u32) -> f32 {
    let mut s = *state;
    s ^= s << 13;
    s ^= s >> 17;
    s ^= s << 5;
    *state = s;
    // Top 24 bits, scaled by 2^-24: exactly representable in f32.
    (s >> 8) as f32 * (1.0 / 16_777_216.0)
}

/// Advances the state and returns a uniform draw in `[0, bound)`.
#[inline]
pub fn next_bounded(state: &mut u32, bound: f32) -> f32 {
    next_unit(state) * bound
}

/// Derives the initial stream state for one point from the run seed.
///
/// Splitmix64-style finalizer over `run_seed` and the point index. The
/// result is never zero: an all-zero xorshift state would stay zero
/// forever.
#[inline]
pub fn seed_stream(run_seed: u64, point_index: u32) -> u32 {
    let mut z = run_seed.wrapping_add((u64::from(point_index) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    let s = (z >> 32) as u32 ^ z as u32;
    if s == 0 { 0x6D2B_79F5 } else { s }
}
