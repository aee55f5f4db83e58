use crate::types::Extremum;

/// Keep the first entry, then every entry at least `min_distance` past the
/// last kept one. Expects `extrema` sorted by index.
pub fn suppress_close(extrema: Vec<Extremum>, min_distance: usize) -> Vec<Extremum> {
    let mut kept: Vec<Extremum> = Vec::with_capacity(extrema.len());
    for e in extrema {
        match kept.last() {
            Some(last) if e.index < last.index + min_distance => {}
            _ => kept.push(e),
        }
    }
    kept
}
