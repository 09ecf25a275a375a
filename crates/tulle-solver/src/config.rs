//! Cloth simulation configuration.

use serde::{Deserialize, Serialize};
use tulle_grid::LatticeParams;
use tulle_types::constants::{
    DEFAULT_GRAVITY, DEFAULT_WIND_BASE_RANGE, DEFAULT_WIND_GROWTH, DEFAULT_WIND_PROBABILITY,
    DEFAULT_WIND_VERTICAL,
};
use tulle_types::{TulleError, TulleResult};

/// Configuration for a cloth simulation run.
///
/// Covers the lattice layout, the forces applied during integration,
/// and the run seed. The sub-step and relaxation-pass counts are fixed
/// protocol constants, not configuration; see
/// [`SUB_STEPS`](tulle_types::constants::SUB_STEPS) and
/// [`RELAX_PASSES`](tulle_types::constants::RELAX_PASSES).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothConfig {
    /// Lattice construction parameters.
    pub lattice: LatticeParams,
    /// Constant acceleration added to every free point each sub-step.
    pub gravity: [f32; 2],
    /// Per-point, per-sub-step probability of a wind gust.
    pub wind_probability: f32,
    /// Horizontal gust bound at the start of the run.
    pub wind_base_range: f32,
    /// Amount the horizontal gust bound grows each sub-step.
    pub wind_growth: f32,
    /// Fixed vertical gust bound.
    pub wind_vertical: f32,
    /// Run seed; every per-point random stream derives from it.
    pub seed: u64,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            lattice: LatticeParams::default(),
            gravity: DEFAULT_GRAVITY,
            wind_probability: DEFAULT_WIND_PROBABILITY,
            wind_base_range: DEFAULT_WIND_BASE_RANGE,
            wind_growth: DEFAULT_WIND_GROWTH,
            wind_vertical: DEFAULT_WIND_VERTICAL,
            seed: 0,
        }
    }
}

impl ClothConfig {
    /// Creates a config with wind disabled entirely.
    ///
    /// Gravity still applies, so the cloth settles into a hanging
    /// equilibrium. Useful for convergence measurements where the
    /// random gusts would mask the constraint solver's behavior.
    pub fn becalmed() -> Self {
        Self {
            wind_probability: 0.0,
            wind_growth: 0.0,
            ..Self::default()
        }
    }

    /// Creates a config with a reduced 64×64 lattice.
    ///
    /// Same forces as the default; small enough for quick iteration
    /// and comparative benchmark runs.
    pub fn small() -> Self {
        Self {
            lattice: LatticeParams {
                size: 64,
                ..LatticeParams::default()
            },
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TulleResult<()> {
        self.lattice.validate()?;
        if !(0.0..=1.0).contains(&self.wind_probability) || !self.wind_probability.is_finite() {
            return Err(TulleError::InvalidConfig(format!(
                "wind probability {} is outside [0, 1]",
                self.wind_probability
            )));
        }
        for (name, value) in [
            ("wind base range", self.wind_base_range),
            ("wind growth", self.wind_growth),
            ("wind vertical bound", self.wind_vertical),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TulleError::InvalidConfig(format!(
                    "{name} {value} must be finite and non-negative"
                )));
            }
        }
        if !(self.gravity[0].is_finite() && self.gravity[1].is_finite()) {
            return Err(TulleError::InvalidConfig(format!(
                "gravity ({}, {}) must be finite",
                self.gravity[0], self.gravity[1]
            )));
        }
        Ok(())
    }
}
