//! Max/min pairing and difference statistics.
//!
//! Maxima and minima are each sorted by index and zipped positionally: the
//! k-th maximum pairs with the k-th minimum, whatever their relative
//! position in the sequence. Surplus entries of the longer list are dropped.

use crate::characteristics::mean_std;
use crate::types::{DifferencePair, Extrema, Extremum};
use serde::Serialize;

/// Pair the maxima and minima of `extrema` in index order.
pub fn pair_differences(extrema: &Extrema) -> Vec<DifferencePair> {
    let maxima = sorted(&extrema.maxima);
    let minima = sorted(&extrema.minima);
    maxima
        .iter()
        .zip(&minima)
        .enumerate()
        .map(|(i, (max, min))| DifferencePair {
            pair_number: i + 1,
            max_index: max.index,
            max_value: max.value,
            min_index: min.index,
            min_value: min.value,
            difference: max.value - min.value,
        })
        .collect()
}

fn sorted(list: &[Extremum]) -> Vec<Extremum> {
    let mut out = list.to_vec();
    out.sort_by_key(|e| e.index);
    out
}

/// Summary statistics over the differences of a pairing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceSummary {
    pub count: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl DifferenceSummary {
    /// `None` when there are no pairs.
    pub fn from_pairs(pairs: &[DifferencePair]) -> Option<Self> {
        if pairs.is_empty() {
            return None;
        }
        let diffs: Vec<f64> = pairs.iter().map(|p| p.difference).collect();
        let (mean, std_dev) = mean_std(&diffs);
        Some(Self {
            count: diffs.len(),
            mean,
            max: diffs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            min: diffs.iter().copied().fold(f64::INFINITY, f64::min),
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_positional_and_truncated() {
        let extrema = Extrema::new(
            vec![Extremum::min(4, 2.0), Extremum::min(2, 1.0)],
            vec![
                Extremum::max(5, 7.0),
                Extremum::max(1, 5.0),
                Extremum::max(3, 6.0),
            ],
        );
        let pairs = pair_differences(&extrema);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].pair_number, 1);
        assert_eq!((pairs[0].max_index, pairs[0].min_index), (1, 2));
        assert_eq!(pairs[0].difference, 4.0);
        assert_eq!((pairs[1].max_index, pairs[1].min_index), (3, 4));
        assert_eq!(pairs[1].difference, 4.0);
    }

    #[test]
    fn minimum_before_maximum_still_pairs() {
        let extrema = Extrema::new(vec![Extremum::min(0, -1.0)], vec![Extremum::max(9, 2.0)]);
        let pairs = pair_differences(&extrema);
        assert_eq!(pairs[0].difference, 3.0);
    }

    #[test]
    fn summary_statistics() {
        let extrema = Extrema::new(
            vec![Extremum::min(1, 0.0), Extremum::min(3, 0.0)],
            vec![Extremum::max(0, 1.0), Extremum::max(2, 3.0)],
        );
        let summary = DifferenceSummary::from_pairs(&pair_differences(&extrema));
        let summary = summary.unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.std_dev, 1.0);
    }

    #[test]
    fn no_pairs_no_summary() {
        let extrema = Extrema::new(Vec::new(), vec![Extremum::max(0, 1.0)]);
        assert!(pair_differences(&extrema).is_empty());
        assert!(DifferenceSummary::from_pairs(&[]).is_none());
    }
}
