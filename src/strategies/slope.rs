//! First-difference sign changes.

use crate::types::{Extrema, Extremum};

/// Report a maximum where the slope turns from rising (`> threshold`) to
/// falling (`< -threshold`), and a minimum for the opposite turn.
///
/// Slopes whose magnitude is below `threshold` are skipped entirely. The
/// extremum is reported at the start of the second slope, i.e. at `i` when
/// `slope[i-1]` and `slope[i]` disagree.
pub fn detect(seq: &[f64], threshold: f64) -> Extrema {
    let mut out = Extrema::default();
    if seq.len() < 4 {
        return out;
    }
    let slopes: Vec<f64> = seq.windows(2).map(|w| w[1] - w[0]).collect();
    for i in 1..slopes.len() - 1 {
        let (prev, cur) = (slopes[i - 1], slopes[i]);
        if cur.abs() < threshold {
            continue;
        }
        if prev > threshold && cur < -threshold {
            out.maxima.push(Extremum::max(i, seq[i]));
        } else if prev < -threshold && cur > threshold {
            out.minima.push(Extremum::min(i, seq[i]));
        }
    }
    out
}
