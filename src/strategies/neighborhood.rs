//! Strict 7-point extrema with a ceiling on minima, walked into an
//! alternating sequence.
//!
//! Backs both the `enhanced` and the `strict` strategy; the two differ only in
//! their [`NeighborhoodRules`]. The numeric rules are empirical and preserved
//! as-is; tune them by building a custom `NeighborhoodRules` and calling
//! [`detect`] directly.

use crate::types::{Extrema, Extremum, ExtremumKind};
use serde::{Deserialize, Serialize};

/// Upper bound on the value of a minimum candidate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MinCeiling {
    /// `min(cap, data_min + data_range * fraction)`.
    RangeRelative { cap: f64, fraction: f64 },
    /// Fixed absolute ceiling.
    Fixed(f64),
}

impl MinCeiling {
    pub fn resolve(&self, seq: &[f64]) -> f64 {
        match *self {
            MinCeiling::Fixed(v) => v,
            MinCeiling::RangeRelative { cap, fraction } => {
                let lo = seq.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = seq.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                cap.min(lo + (hi - lo) * fraction)
            }
        }
    }
}

/// Knobs of the neighbourhood strategies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodRules {
    /// Candidates must strictly dominate every point within this radius.
    pub radius: usize,
    pub min_ceiling: MinCeiling,
    /// Minimum index distance to the previously accepted extremum.
    pub min_distance: usize,
    /// Required move from the previous extremum, in multiples of the threshold.
    pub margin_factor: f64,
    /// Whether a leading minimum must itself respect the ceiling.
    pub gate_leading_min: bool,
}

impl NeighborhoodRules {
    pub const ENHANCED: NeighborhoodRules = NeighborhoodRules {
        radius: 3,
        min_ceiling: MinCeiling::RangeRelative {
            cap: 0.4,
            fraction: 0.3,
        },
        min_distance: 2,
        margin_factor: 2.0,
        gate_leading_min: false,
    };

    pub const STRICT: NeighborhoodRules = NeighborhoodRules {
        radius: 3,
        min_ceiling: MinCeiling::Fixed(0.4),
        min_distance: 3,
        margin_factor: 3.0,
        gate_leading_min: true,
    };
}

/// Run the neighbourhood strategy described by `rules`.
pub fn detect(seq: &[f64], threshold: f64, rules: &NeighborhoodRules) -> Extrema {
    let n = seq.len();
    let r = rules.radius.max(1);
    if n < 3 || n < 2 * r + 1 {
        return Extrema::default();
    }
    let ceiling = rules.min_ceiling.resolve(seq);

    // Candidates come back in index order; at most one per index.
    let candidates = scan_candidates(seq, r, ceiling);

    let margin = threshold * rules.margin_factor;
    let mut accepted: Vec<Extremum> = Vec::with_capacity(candidates.len());
    for cand in candidates {
        let Some(last) = accepted.last() else {
            let admissible = !rules.gate_leading_min
                || cand.kind == ExtremumKind::Max
                || cand.value <= ceiling;
            if admissible {
                accepted.push(cand);
            }
            continue;
        };
        if cand.kind == last.kind {
            continue;
        }
        let distance = cand.index - last.index;
        let change = (cand.value - last.value).abs();
        if distance < rules.min_distance || change < threshold {
            continue;
        }
        let keep = match cand.kind {
            ExtremumKind::Min => cand.value <= ceiling && cand.value < last.value - margin,
            ExtremumKind::Max => cand.value > last.value + margin,
        };
        if keep {
            accepted.push(cand);
        }
    }
    accepted.into_iter().collect()
}

#[cfg(feature = "parallel")]
fn scan_candidates(seq: &[f64], r: usize, ceiling: f64) -> Vec<Extremum> {
    use rayon::prelude::*;

    (r..seq.len() - r)
        .into_par_iter()
        .filter_map(|i| classify(seq, i, r, ceiling))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn scan_candidates(seq: &[f64], r: usize, ceiling: f64) -> Vec<Extremum> {
    (r..seq.len() - r)
        .filter_map(|i| classify(seq, i, r, ceiling))
        .collect()
}

fn classify(seq: &[f64], i: usize, r: usize, ceiling: f64) -> Option<Extremum> {
    let cur = seq[i];
    let mut neighbours = seq[i - r..i].iter().chain(&seq[i + 1..=i + r]);
    if neighbours.clone().all(|&v| v < cur) {
        return Some(Extremum::max(i, cur));
    }
    if cur <= ceiling && neighbours.all(|&v| v > cur) {
        return Some(Extremum::min(i, cur));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ_TWO_MINIMA: [f64; 15] = [
        0.5, 0.5, 0.5, 1.0, 0.5, 0.5, 0.5, -0.2, 0.5, 0.5, 0.5, -1.0, 0.5, 0.5, 0.5,
    ];

    #[test]
    fn enhanced_ceiling_follows_data_range() {
        // ceiling = min(0.4, -1 + 2 * 0.3) = -0.4, so -0.2 is not a candidate.
        let out = detect(&SEQ_TWO_MINIMA, 1e-4, &NeighborhoodRules::ENHANCED);
        assert_eq!(out.maxima_pairs(), vec![(3, 1.0)]);
        assert_eq!(out.minima_pairs(), vec![(11, -1.0)]);
    }

    #[test]
    fn strict_ceiling_is_fixed() {
        let out = detect(&SEQ_TWO_MINIMA, 1e-4, &NeighborhoodRules::STRICT);
        assert_eq!(out.maxima_pairs(), vec![(3, 1.0)]);
        assert_eq!(out.minima_pairs(), vec![(7, -0.2)]);
    }

    #[test]
    fn strict_requires_wider_spacing() {
        let seq = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let enhanced = detect(&seq, 1e-4, &NeighborhoodRules::ENHANCED);
        assert_eq!(enhanced.maxima_pairs(), vec![(4, 1.0)]);
        assert_eq!(enhanced.minima_pairs(), vec![(6, -1.0)]);

        let strict = detect(&seq, 1e-4, &NeighborhoodRules::STRICT);
        assert_eq!(strict.maxima_pairs(), vec![(4, 1.0)]);
        assert!(strict.minima.is_empty());
    }

    #[test]
    fn minima_above_ceiling_are_never_candidates() {
        // Shifted up by 10: every minimum sits above the 0.4 cap.
        let seq: Vec<f64> = SEQ_TWO_MINIMA.iter().map(|v| v + 10.0).collect();
        for rules in [NeighborhoodRules::ENHANCED, NeighborhoodRules::STRICT] {
            let out = detect(&seq, 1e-4, &rules);
            assert!(out.minima.is_empty());
            assert_eq!(out.maxima_pairs(), vec![(3, 11.0)]);
        }
    }

    #[test]
    fn leading_minimum_is_accepted_when_under_ceiling() {
        let seq = [0.3, 0.3, 0.3, 0.0, 0.3, 0.3, 0.3, 0.3, 0.3, 1.0, 0.3, 0.3, 0.3];
        let out = detect(&seq, 1e-4, &NeighborhoodRules::STRICT);
        assert_eq!(out.minima_pairs(), vec![(3, 0.0)]);
        assert_eq!(out.maxima_pairs(), vec![(9, 1.0)]);
    }

    /// Peak of 0.3 at index 3 followed by a dip to `low` at index 7.
    fn peak_then_dip(low: f64) -> [f64; 11] {
        [0.2, 0.2, 0.2, 0.3, 0.2, 0.2, 0.2, low, 0.2, 0.2, 0.2]
    }

    #[test]
    fn swing_between_two_and_three_thresholds() {
        // Swing 0.25 with t = 0.1: clears the 2t margin, misses the 3t one.
        let seq = peak_then_dip(0.05);
        let enhanced = detect(&seq, 0.1, &NeighborhoodRules::ENHANCED);
        assert_eq!(enhanced.maxima_pairs(), vec![(3, 0.3)]);
        assert_eq!(enhanced.minima_pairs(), vec![(7, 0.05)]);

        let strict = detect(&seq, 0.1, &NeighborhoodRules::STRICT);
        assert_eq!(strict.maxima_pairs(), vec![(3, 0.3)]);
        assert!(strict.minima.is_empty());
    }

    #[test]
    fn swing_within_two_thresholds_is_rejected() {
        // Swing 0.18 with t = 0.1: above t but inside the 2t margin.
        let seq = peak_then_dip(0.12);
        let out = detect(&seq, 0.1, &NeighborhoodRules::ENHANCED);
        assert_eq!(out.maxima_pairs(), vec![(3, 0.3)]);
        assert!(out.minima.is_empty());

        // With a tiny threshold the same dip is accepted.
        let out = detect(&seq, 1e-4, &NeighborhoodRules::ENHANCED);
        assert_eq!(out.minima_pairs(), vec![(7, 0.12)]);
    }

    #[test]
    fn ties_are_not_strict_extrema() {
        let seq = [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0];
        assert!(detect(&seq, 1e-4, &NeighborhoodRules::ENHANCED).is_empty());
    }

    #[test]
    fn ceiling_resolution() {
        let seq = [-1.0, 1.0];
        let relative = NeighborhoodRules::ENHANCED.min_ceiling.resolve(&seq);
        assert!((relative - (-0.4)).abs() < 1e-12);
        assert_eq!(NeighborhoodRules::STRICT.min_ceiling.resolve(&seq), 0.4);
        assert_eq!(
            NeighborhoodRules::ENHANCED.min_ceiling.resolve(&[0.0, 10.0]),
            0.4
        );
    }
}
