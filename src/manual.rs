//! Manual selection snapping.
//!
//! A user marks approximate maxima and minima (typically by clicking a
//! plot). [`snap_selections`] moves every mark to the true extreme of the
//! surrounding window, so the reported points are exact samples of the
//! sequence.

use crate::types::{Extrema, Extremum, ExtremumKind};
use serde::{Deserialize, Serialize};

/// Default half-width of the snap window.
pub const DEFAULT_SNAP_RADIUS: usize = 10;

/// A point picked by the user.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl Selection {
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }
}

/// Maxima and minima candidates picked by the user, in insertion order.
///
/// A selection whose index is already present for the same kind is ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSet {
    pub maxima: Vec<Selection>,
    pub minima: Vec<Selection>,
}

impl SelectionSet {
    /// Add a maximum candidate. Returns `false` when the index was already
    /// selected.
    pub fn add_max(&mut self, selection: Selection) -> bool {
        add_unique(&mut self.maxima, selection)
    }

    /// Add a minimum candidate. Returns `false` when the index was already
    /// selected.
    pub fn add_min(&mut self, selection: Selection) -> bool {
        add_unique(&mut self.minima, selection)
    }

    pub fn add(&mut self, kind: ExtremumKind, selection: Selection) -> bool {
        match kind {
            ExtremumKind::Max => self.add_max(selection),
            ExtremumKind::Min => self.add_min(selection),
        }
    }

    pub fn clear(&mut self) {
        self.maxima.clear();
        self.minima.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.maxima.is_empty() && self.minima.is_empty()
    }

    pub fn len(&self) -> usize {
        self.maxima.len() + self.minima.len()
    }
}

fn add_unique(list: &mut Vec<Selection>, selection: Selection) -> bool {
    if list.iter().any(|s| s.index == selection.index) {
        return false;
    }
    list.push(selection);
    true
}

/// Parameters of the snap search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapOptions {
    /// Points inspected on each side of the selection.
    pub radius: usize,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SNAP_RADIUS,
        }
    }
}

/// Find the sample of `(xs, ys)` closest to `(x, y)` in Euclidean distance,
/// as long as it lies strictly within `max_distance`.
///
/// Useful to turn a click position into a [`Selection`].
pub fn nearest_point(xs: &[f64], ys: &[f64], x: f64, y: f64, max_distance: f64) -> Option<Selection> {
    xs.iter()
        .zip(ys)
        .enumerate()
        .map(|(index, (&px, &py))| ((px - x).hypot(py - y), Selection::new(index, px, py)))
        .filter(|(dist, _)| dist.is_finite())
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .filter(|(dist, _)| *dist < max_distance)
        .map(|(_, selection)| selection)
}

/// Snap `index` to the extreme of kind `kind` within `radius` points.
///
/// The search starts from the selected sample itself and only moves on a
/// strict improvement, so the earliest of equal extremes wins unless the
/// selection already sits on one. Returns `None` for an out-of-range index.
pub fn snap(seq: &[f64], index: usize, kind: ExtremumKind, radius: usize) -> Option<Extremum> {
    let mut best = Extremum::new(kind, index, *seq.get(index)?);
    let start = index.saturating_sub(radius);
    let end = seq.len().min(index.saturating_add(radius).saturating_add(1));
    for (i, &v) in seq.iter().enumerate().take(end).skip(start) {
        let better = match kind {
            ExtremumKind::Max => v > best.value,
            ExtremumKind::Min => v < best.value,
        };
        if better {
            best = Extremum::new(kind, i, v);
        }
    }
    Some(best)
}

/// Snap every selection of `selections`, dropping exact `(index, value)`
/// repeats within each kind. Selections outside `seq` are skipped.
pub fn snap_selections(seq: &[f64], selections: &SelectionSet, options: &SnapOptions) -> Extrema {
    Extrema::new(
        snap_all(seq, &selections.minima, ExtremumKind::Min, options.radius),
        snap_all(seq, &selections.maxima, ExtremumKind::Max, options.radius),
    )
}

fn snap_all(seq: &[f64], selections: &[Selection], kind: ExtremumKind, radius: usize) -> Vec<Extremum> {
    let mut out: Vec<Extremum> = Vec::with_capacity(selections.len());
    for selection in selections {
        let Some(found) = snap(seq, selection.index, kind, radius) else {
            continue;
        };
        if !out.iter().any(|e| e.pair() == found.pair()) {
            out.push(found);
        }
    }
    out
}
