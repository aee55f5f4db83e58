//! Sequence characteristics driving automatic strategy selection.
//!
//! Computes basic statistics (min/max/mean/population std), a noise proxy
//! (std-dev of the first differences), and two pattern flags:
//! - oscillatory: the slope changes sign frequently;
//! - plateau: a run of near-constant consecutive values exists.

use crate::strategies::simple;
use serde::{Deserialize, Serialize};

/// Fraction of slope sign changes above which a sequence is oscillatory.
const OSCILLATION_RATE: f64 = 0.3;
/// Sequences shorter than this are never oscillatory.
const OSCILLATION_MIN_LEN: usize = 10;
/// Consecutive near-flat differences that make a plateau.
const PLATEAU_RUN: usize = 5;
/// Sequences shorter than this never have plateaus.
const PLATEAU_MIN_LEN: usize = 5;
/// Flatness limit for plateau detection, as a fraction of the noise level.
const PLATEAU_NOISE_FRACTION: f64 = 0.5;
/// Tolerance of the preliminary extrema count, as a fraction of the noise level.
const PRELIMINARY_NOISE_FRACTION: f64 = 0.1;

/// Read-only snapshot of a sequence's statistical character.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    pub length: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub range: f64,
    /// Standard deviation of the first differences.
    pub noise_level: f64,
    /// `std_dev / range`, or 0 when the range is 0.
    pub variability: f64,
    /// Preliminary extrema per sample.
    pub extrema_density: f64,
    pub is_oscillatory: bool,
    pub has_plateaus: bool,
    pub estimated_extrema_count: usize,
}

impl Characteristics {
    /// Analyse `seq`. Empty input yields the zeroed default.
    pub fn analyze(seq: &[f64]) -> Self {
        if seq.is_empty() {
            return Self::default();
        }
        let length = seq.len();
        let min = seq.iter().copied().fold(f64::INFINITY, f64::min);
        let max = seq.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (mean, std_dev) = mean_std(seq);
        let range = max - min;

        let diffs = first_differences(seq);
        let noise_level = mean_std(&diffs).1;
        let variability = if range > 0.0 { std_dev / range } else { 0.0 };

        let preliminary = simple::detect(seq, noise_level * PRELIMINARY_NOISE_FRACTION);
        let estimated_extrema_count = preliminary.len();
        let extrema_density = estimated_extrema_count as f64 / length as f64;

        Self {
            length,
            min,
            max,
            mean,
            std_dev,
            range,
            noise_level,
            variability,
            extrema_density,
            is_oscillatory: is_oscillatory(seq),
            has_plateaus: has_plateaus(seq, noise_level),
            estimated_extrema_count,
        }
    }
}

/// Mean and population standard deviation; `(0, 0)` for empty input.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

pub fn first_differences(seq: &[f64]) -> Vec<f64> {
    seq.windows(2).map(|w| w[1] - w[0]).collect()
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Fraction of slope sign changes (zero counts as its own sign) exceeds the
/// oscillation rate.
pub fn is_oscillatory(seq: &[f64]) -> bool {
    if seq.len() < OSCILLATION_MIN_LEN {
        return false;
    }
    let diffs = first_differences(seq);
    let changes = diffs
        .windows(2)
        .filter(|w| sign(w[0]) != sign(w[1]))
        .count();
    changes as f64 / diffs.len() as f64 > OSCILLATION_RATE
}

/// At least [`PLATEAU_RUN`] consecutive absolute differences fall below half
/// the noise level.
pub fn has_plateaus(seq: &[f64], noise_level: f64) -> bool {
    if seq.len() < PLATEAU_MIN_LEN {
        return false;
    }
    let flat = noise_level * PLATEAU_NOISE_FRACTION;
    let mut run = 0usize;
    for w in seq.windows(2) {
        if (w[1] - w[0]).abs() < flat {
            run += 1;
            if run >= PLATEAU_RUN {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
