//! Strict 5-point extrema walked into an alternating sequence.

use crate::types::{Extrema, Extremum, ExtremumKind};

/// Detect extrema that strictly dominate their neighbours at offsets ±1 and
/// ±2 (by more than `threshold`), then keep only those that alternate in
/// kind and move away from the previously accepted extremum by more than
/// `threshold`.
pub fn detect(seq: &[f64], threshold: f64) -> Extrema {
    let n = seq.len();
    if n < 5 {
        return Extrema::default();
    }

    let mut maxima = Vec::new();
    let mut minima = Vec::new();
    for i in 2..n - 2 {
        let cur = seq[i];
        let neighbours = [seq[i - 2], seq[i - 1], seq[i + 1], seq[i + 2]];
        if neighbours.iter().all(|&v| cur > v + threshold) {
            maxima.push(Extremum::max(i, cur));
        } else if neighbours.iter().all(|&v| cur < v - threshold) {
            minima.push(Extremum::min(i, cur));
        }
    }

    let mut candidates = maxima;
    candidates.extend(minima);
    candidates.sort_by_key(|e| e.index);

    let mut accepted: Vec<Extremum> = Vec::with_capacity(candidates.len());
    for cand in candidates {
        let Some(last) = accepted.last() else {
            accepted.push(cand);
            continue;
        };
        if cand.kind == last.kind {
            continue;
        }
        let moved = match cand.kind {
            ExtremumKind::Max => cand.value > last.value + threshold,
            ExtremumKind::Min => cand.value < last.value - threshold,
        };
        if moved {
            accepted.push(cand);
        }
    }
    accepted.into_iter().collect()
}
