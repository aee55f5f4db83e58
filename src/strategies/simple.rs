//! Immediate-neighbour comparison.

use crate::types::{Extrema, Extremum};

/// Classify each interior point against its two neighbours.
///
/// A maximum rises by more than `threshold` from the left and does not fall
/// short of the right neighbour by more than `threshold`; minima mirror that.
/// The maximum test runs first, so a point is never both.
pub fn detect(seq: &[f64], threshold: f64) -> Extrema {
    let mut out = Extrema::default();
    if seq.len() < 3 {
        return out;
    }
    for i in 1..seq.len() - 1 {
        let (prev, cur, next) = (seq[i - 1], seq[i], seq[i + 1]);
        if cur > prev + threshold && cur >= next - threshold {
            out.maxima.push(Extremum::max(i, cur));
        } else if cur < prev - threshold && cur <= next + threshold {
            out.minima.push(Extremum::min(i, cur));
        }
    }
    out
}
