//! Refinement of raw strategy candidates.
//!
//! Three passes, applied independently to maxima and minima:
//!
//! 1. dedup by index (a later entry wins) and sort ascending;
//! 2. [`spacing`]: drop entries closer than `min_distance` to the last kept
//!    entry of the same kind;
//! 3. [`quality`]: drop entries that are not within a noise-scaled margin of
//!    the local extreme (skipped when the noise level is zero).
//!
//! Refinement is idempotent: running it on its own output changes nothing.

pub mod options;
pub mod quality;
pub mod spacing;

pub use options::{RefineOptions, ResolvedRefine};

use crate::types::{Extrema, Extremum, ExtremumKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-pass survivor counts emitted by [`refine_extrema`].
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineDiagnostics {
    pub input_minima: usize,
    pub input_maxima: usize,
    pub deduplicated_minima: usize,
    pub deduplicated_maxima: usize,
    pub min_distance: usize,
    pub spaced_minima: usize,
    pub spaced_maxima: usize,
    pub quality_applied: bool,
    pub quality_radius: usize,
    pub quality_tolerance: f64,
    pub kept_minima: usize,
    pub kept_maxima: usize,
}

/// Refine `raw` candidates found on `seq`.
pub fn refine_extrema(
    raw: Extrema,
    seq: &[f64],
    noise_level: f64,
    options: &RefineOptions,
) -> (Extrema, RefineDiagnostics) {
    let limits = options.for_length(seq.len());
    let mut diag = RefineDiagnostics {
        input_minima: raw.minima.len(),
        input_maxima: raw.maxima.len(),
        min_distance: limits.min_distance,
        quality_radius: limits.quality_radius,
        quality_tolerance: noise_level * limits.quality_noise_factor,
        ..Default::default()
    };

    let minima = dedup_sorted(raw.minima, ExtremumKind::Min);
    let maxima = dedup_sorted(raw.maxima, ExtremumKind::Max);
    diag.deduplicated_minima = minima.len();
    diag.deduplicated_maxima = maxima.len();

    let mut minima = spacing::suppress_close(minima, limits.min_distance);
    let mut maxima = spacing::suppress_close(maxima, limits.min_distance);
    diag.spaced_minima = minima.len();
    diag.spaced_maxima = maxima.len();

    if noise_level > 0.0 {
        diag.quality_applied = true;
        let tolerance = diag.quality_tolerance;
        minima = quality::filter_by_quality(minima, seq, limits.quality_radius, tolerance);
        maxima = quality::filter_by_quality(maxima, seq, limits.quality_radius, tolerance);
    }
    diag.kept_minima = minima.len();
    diag.kept_maxima = maxima.len();

    (Extrema::new(minima, maxima), diag)
}

/// Collapse duplicate indices (the later entry wins) and sort by index.
///
/// Entries are re-tagged with `kind` so a mislabelled candidate cannot leak
/// into the wrong list.
pub fn dedup_sorted(extrema: Vec<Extremum>, kind: ExtremumKind) -> Vec<Extremum> {
    let by_index: BTreeMap<usize, f64> = extrema.into_iter().map(|e| (e.index, e.value)).collect();
    by_index
        .into_iter()
        .map(|(index, value)| Extremum::new(kind, index, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_last_value_and_sorts() {
        let input = vec![
            Extremum::max(5, 1.0),
            Extremum::max(2, 3.0),
            Extremum::max(5, 4.0),
        ];
        let out = dedup_sorted(input, ExtremumKind::Max);
        let pairs: Vec<_> = out.iter().map(Extremum::pair).collect();
        assert_eq!(pairs, vec![(2, 3.0), (5, 4.0)]);
    }

    #[test]
    fn zigzag_survives_refinement() {
        let seq = [0.0, 5.0, 1.0, 6.0, 2.0, 7.0, 0.0];
        let raw = crate::strategies::simple::detect(&seq, 1e-4);
        let noise = crate::characteristics::Characteristics::analyze(&seq).noise_level;
        let (out, diag) = refine_extrema(raw.clone(), &seq, noise, &RefineOptions::default());
        assert_eq!(out, raw);
        assert!(diag.quality_applied);
        assert_eq!(diag.quality_radius, 0);
        assert_eq!(diag.kept_maxima, 3);
    }

    #[test]
    fn zero_noise_skips_quality_pass() {
        let seq = [0.0; 30];
        let raw = Extrema::new(vec![Extremum::min(10, 0.0)], vec![Extremum::max(20, 0.0)]);
        let (out, diag) = refine_extrema(raw.clone(), &seq, 0.0, &RefineOptions::default());
        assert!(!diag.quality_applied);
        assert_eq!(out, raw);
    }

    #[test]
    fn refinement_is_idempotent() {
        let seq: Vec<f64> = (0..200)
            .map(|i| {
                let x = i as f64;
                (x * 0.3).sin() + 0.2 * (x * 2.7).sin()
            })
            .collect();
        let noise = crate::characteristics::Characteristics::analyze(&seq).noise_level;
        let raw = crate::strategies::simple::detect(&seq, 1e-4);
        let opts = RefineOptions::default();
        let (once, _) = refine_extrema(raw, &seq, noise, &opts);
        let (twice, _) = refine_extrema(once.clone(), &seq, noise, &opts);
        assert_eq!(once, twice);
    }
}
