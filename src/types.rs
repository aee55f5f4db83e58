use crate::characteristics::Characteristics;
use crate::detector::params::Method;
use crate::strategies::Strategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the signal an extremum sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremumKind {
    Max,
    Min,
}

impl fmt::Display for ExtremumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtremumKind::Max => f.write_str("max"),
            ExtremumKind::Min => f.write_str("min"),
        }
    }
}

/// A classified point of the input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub index: usize,
    pub value: f64,
    pub kind: ExtremumKind,
}

impl Extremum {
    pub fn max(index: usize, value: f64) -> Self {
        Self {
            index,
            value,
            kind: ExtremumKind::Max,
        }
    }

    pub fn min(index: usize, value: f64) -> Self {
        Self {
            index,
            value,
            kind: ExtremumKind::Min,
        }
    }

    pub fn new(kind: ExtremumKind, index: usize, value: f64) -> Self {
        Self { index, value, kind }
    }

    /// `(index, value)` view, handy for comparisons in tests and reports.
    pub fn pair(&self) -> (usize, f64) {
        (self.index, self.value)
    }
}

/// Minima and maxima found by one stage of the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub minima: Vec<Extremum>,
    pub maxima: Vec<Extremum>,
}

impl Extrema {
    pub fn new(minima: Vec<Extremum>, maxima: Vec<Extremum>) -> Self {
        Self { minima, maxima }
    }

    pub fn is_empty(&self) -> bool {
        self.minima.is_empty() && self.maxima.is_empty()
    }

    pub fn len(&self) -> usize {
        self.minima.len() + self.maxima.len()
    }

    pub fn push(&mut self, extremum: Extremum) {
        match extremum.kind {
            ExtremumKind::Max => self.maxima.push(extremum),
            ExtremumKind::Min => self.minima.push(extremum),
        }
    }

    pub fn of_kind(&self, kind: ExtremumKind) -> &[Extremum] {
        match kind {
            ExtremumKind::Max => &self.maxima,
            ExtremumKind::Min => &self.minima,
        }
    }

    /// All extrema merged and stably sorted by index.
    pub fn sorted_by_index(&self) -> Vec<Extremum> {
        let mut all: Vec<Extremum> = self
            .maxima
            .iter()
            .chain(self.minima.iter())
            .copied()
            .collect();
        all.sort_by_key(|e| e.index);
        all
    }

    pub fn minima_pairs(&self) -> Vec<(usize, f64)> {
        self.minima.iter().map(Extremum::pair).collect()
    }

    pub fn maxima_pairs(&self) -> Vec<(usize, f64)> {
        self.maxima.iter().map(Extremum::pair).collect()
    }
}

impl FromIterator<Extremum> for Extrema {
    fn from_iter<I: IntoIterator<Item = Extremum>>(iter: I) -> Self {
        let mut out = Extrema::default();
        for e in iter {
            out.push(e);
        }
        out
    }
}

/// A max/min pair taken in index order together with its difference.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferencePair {
    pub pair_number: usize,
    pub max_index: usize,
    pub max_value: f64,
    pub min_index: usize,
    pub min_value: f64,
    pub difference: f64,
}

/// Outcome of a full detection run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Method as requested by the caller.
    pub requested: Method,
    /// Strategy that actually ran.
    pub method: Strategy,
    pub characteristics: Characteristics,
    pub extrema: Extrema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_routes_by_kind() {
        let mut set = Extrema::default();
        set.push(Extremum::max(3, 1.0));
        set.push(Extremum::min(1, -1.0));
        set.push(Extremum::max(5, 2.0));
        assert_eq!(set.maxima_pairs(), vec![(3, 1.0), (5, 2.0)]);
        assert_eq!(set.minima_pairs(), vec![(1, -1.0)]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn sorted_by_index_interleaves_kinds() {
        let set = Extrema::new(
            vec![Extremum::min(2, 0.0), Extremum::min(6, 0.0)],
            vec![Extremum::max(4, 1.0), Extremum::max(0, 1.0)],
        );
        let indices: Vec<_> = set.sorted_by_index().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 2, 4, 6]);
    }
}
