//! Options controlling candidate refinement.
//!
//! The defaults reproduce the empirical constants the detector has always
//! used. Length-dependent quantities are derived per sequence with
//! [`RefineOptions::for_length`].

use serde::{Deserialize, Serialize};

/// Parameters of the dedup / spacing / quality refinement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineOptions {
    /// Lower bound on the same-kind spacing.
    pub min_distance_floor: usize,
    /// Spacing grows as `len / min_distance_divisor`.
    pub min_distance_divisor: usize,
    /// Upper bound on the quality window radius.
    pub quality_radius_cap: usize,
    /// Quality radius grows as `len / quality_radius_divisor`.
    pub quality_radius_divisor: usize,
    /// Allowed distance from the local extreme, in multiples of the noise level.
    pub quality_noise_factor: f64,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            min_distance_floor: 2,
            min_distance_divisor: 100,
            quality_radius_cap: 3,
            quality_radius_divisor: 10,
            quality_noise_factor: 2.0,
        }
    }
}

/// Refinement limits resolved for one sequence length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRefine {
    pub min_distance: usize,
    pub quality_radius: usize,
    pub quality_noise_factor: f64,
}

impl RefineOptions {
    /// Resolve the length-dependent limits for a sequence of `len` points.
    pub fn for_length(&self, len: usize) -> ResolvedRefine {
        let scaled = |divisor: usize| if divisor == 0 { 0 } else { len / divisor };
        ResolvedRefine {
            min_distance: self
                .min_distance_floor
                .max(scaled(self.min_distance_divisor)),
            quality_radius: self
                .quality_radius_cap
                .min(scaled(self.quality_radius_divisor)),
            quality_noise_factor: self.quality_noise_factor,
        }
    }
}
