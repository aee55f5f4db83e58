use crate::types::{Extremum, ExtremumKind};

/// Keep extrema that sit within `tolerance` of the extreme of their local
/// window (`radius` points either side, clipped to the sequence).
pub fn filter_by_quality(
    extrema: Vec<Extremum>,
    seq: &[f64],
    radius: usize,
    tolerance: f64,
) -> Vec<Extremum> {
    extrema
        .into_iter()
        .filter(|e| passes(e, seq, radius, tolerance))
        .collect()
}

fn passes(e: &Extremum, seq: &[f64], radius: usize, tolerance: f64) -> bool {
    let start = e.index.saturating_sub(radius);
    let end = seq.len().min(e.index + radius + 1);
    let Some(window) = seq.get(start..end).filter(|w| !w.is_empty()) else {
        return false;
    };
    match e.kind {
        ExtremumKind::Min => {
            let local = window.iter().copied().fold(f64::INFINITY, f64::min);
            e.value <= local + tolerance
        }
        ExtremumKind::Max => {
            let local = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            e.value >= local - tolerance
        }
    }
}
