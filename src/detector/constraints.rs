//! User constraints applied after refinement.
//!
//! Two filters run in order:
//! - value thresholds: maxima must reach `max_value_threshold` (when > 0),
//!   minima must stay under `min_value_threshold` (unless it is the 999
//!   sentinel);
//! - count limits: keep the N entries with the largest absolute value. A
//!   request that names an alternating-family strategy is exempt since
//!   truncation would break the max/min alternation those strategies
//!   guarantee. `auto` is never exempt, whatever strategy it resolved to.
use crate::detector::params::{DetectionRequest, Method, MIN_VALUE_UNLIMITED};
use crate::types::{Extrema, Extremum};
use serde::Serialize;

/// Diagnostics emitted by the constraint filter.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintDiagnostics {
    pub max_value_threshold: Option<f64>,
    pub min_value_threshold: Option<f64>,
    pub below_threshold_maxima: usize,
    pub above_threshold_minima: usize,
    pub count_limits_exempt: bool,
    pub truncated_maxima: usize,
    pub truncated_minima: usize,
}

/// Apply thresholds then the count limits of `request`.
pub fn apply_constraints(extrema: Extrema, request: &DetectionRequest) -> (Extrema, ConstraintDiagnostics) {
    let mut diag = ConstraintDiagnostics::default();

    let before = (extrema.maxima.len(), extrema.minima.len());
    let thresholded = apply_value_thresholds(
        extrema,
        request.max_value_threshold,
        request.min_value_threshold,
    );
    if request.max_value_threshold > 0.0 {
        diag.max_value_threshold = Some(request.max_value_threshold);
    }
    if request.min_value_threshold < MIN_VALUE_UNLIMITED {
        diag.min_value_threshold = Some(request.min_value_threshold);
    }
    diag.below_threshold_maxima = before.0 - thresholded.maxima.len();
    diag.above_threshold_minima = before.1 - thresholded.minima.len();

    diag.count_limits_exempt = count_limits_exempt(request.method);
    let before = (thresholded.maxima.len(), thresholded.minima.len());
    let limited = apply_count_limits(
        thresholded,
        request.max_count_limit,
        request.min_count_limit,
        request.method,
    );
    diag.truncated_maxima = before.0 - limited.maxima.len();
    diag.truncated_minima = before.1 - limited.minima.len();

    (limited, diag)
}

/// Keep maxima `>= max_threshold` (if positive) and minima `<= min_threshold`
/// (unless it is the [`MIN_VALUE_UNLIMITED`] sentinel or above).
pub fn apply_value_thresholds(extrema: Extrema, max_threshold: f64, min_threshold: f64) -> Extrema {
    let Extrema {
        mut minima,
        mut maxima,
    } = extrema;
    if max_threshold > 0.0 {
        maxima.retain(|e| e.value >= max_threshold);
    }
    if min_threshold < MIN_VALUE_UNLIMITED {
        minima.retain(|e| e.value <= min_threshold);
    }
    Extrema::new(minima, maxima)
}

/// True when `method` names a strategy of the alternating family.
pub fn count_limits_exempt(method: Method) -> bool {
    method
        .strategy()
        .is_some_and(|s| s.is_alternating_family())
}

/// Cap the number of maxima/minima (0 = unlimited). No-op when `method` is
/// exempt, see [`count_limits_exempt`].
pub fn apply_count_limits(
    extrema: Extrema,
    max_limit: usize,
    min_limit: usize,
    method: Method,
) -> Extrema {
    if count_limits_exempt(method) {
        return extrema;
    }
    Extrema::new(
        keep_largest(extrema.minima, min_limit),
        keep_largest(extrema.maxima, max_limit),
    )
}

/// Keep the `limit` entries with the largest `|value|` (stable on ties), in
/// index order.
fn keep_largest(mut extrema: Vec<Extremum>, limit: usize) -> Vec<Extremum> {
    if limit == 0 || extrema.len() <= limit {
        return extrema;
    }
    extrema.sort_by(|a, b| b.value.abs().total_cmp(&a.value.abs()));
    extrema.truncate(limit);
    extrema.sort_by_key(|e| e.index);
    extrema
}
