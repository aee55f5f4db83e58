//! Window dominance.

use crate::types::{Extrema, Extremum};

/// A point is a maximum when it is `>=` every value within `window_size`
/// positions on either side, otherwise a minimum when it is `<=` all of them.
///
/// Only points with a full window on both sides are considered. Flat runs
/// classify as maxima since the maximum test runs first.
pub fn detect(seq: &[f64], window_size: usize) -> Extrema {
    let mut out = Extrema::default();
    let n = seq.len();
    if n < 3 || n < window_size + 2 {
        return out;
    }
    let w = window_size;
    for i in w..n.saturating_sub(w) {
        let cur = seq[i];
        let neighbours = seq[i - w..i].iter().chain(&seq[i + 1..i + w + 1]);
        let (mut is_max, mut is_min) = (true, true);
        for &v in neighbours {
            is_max &= cur >= v;
            is_min &= cur <= v;
        }
        if is_max {
            out.maxima.push(Extremum::max(i, cur));
        } else if is_min {
            out.minima.push(Extremum::min(i, cur));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_window_dominant_points() {
        let seq = [0.0, 1.0, 2.0, 5.0, 2.0, 1.0, -3.0, 1.0, 2.0, 3.0];
        let out = detect(&seq, 2);
        assert_eq!(out.maxima_pairs(), vec![(3, 5.0)]);
        assert_eq!(out.minima_pairs(), vec![(6, -3.0)]);
    }

    #[test]
    fn flat_run_prefers_maximum() {
        let seq = [1.0; 8];
        let out = detect(&seq, 3);
        assert_eq!(out.maxima_pairs(), vec![(3, 1.0), (4, 1.0)]);
        assert!(out.minima.is_empty());
    }

    #[test]
    fn too_short_for_window() {
        assert!(detect(&[0.0, 1.0, 0.0, 1.0], 3).is_empty());
    }

    #[test]
    fn edges_without_full_window_are_skipped() {
        // Index 1 is the global max but lacks a 3-wide left window.
        let seq = [0.0, 9.0, 0.0, 1.0, 2.0, 1.0, 0.0, 0.0];
        let out = detect(&seq, 3);
        assert!(out.maxima.iter().all(|e| e.index >= 3));
    }
}
