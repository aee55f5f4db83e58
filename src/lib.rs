#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod characteristics;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod manual;
pub mod pairing;
pub mod types;

// Supporting modules for the demo tools.
pub mod config;
pub mod io;

// “Expert” modules – still public, but mostly useful for experiments with
// individual stages.
pub mod refine;
pub mod strategies;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectionRequest, ExtremaDetector, Method, RequestFields};
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::strategies::Strategy;
pub use crate::types::{DetectionResult, Extrema, Extremum, ExtremumKind};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use extrema_detector::prelude::*;
///
/// let seq: Vec<f64> = (0..50).map(|i| (i as f64 * 0.4).sin()).collect();
/// let det = ExtremaDetector::new(DetectionRequest::default().with_method(Strategy::Simple));
/// let res = det.detect(&seq);
/// let pairs = pair_differences(&res.extrema);
/// println!("method={} pairs={}", res.method, pairs.len());
/// ```
pub mod prelude {
    pub use crate::manual::{snap_selections, Selection, SelectionSet, SnapOptions};
    pub use crate::pairing::{pair_differences, DifferenceSummary};
    pub use crate::{
        DetectionRequest, DetectionResult, Extrema, Extremum, ExtremumKind, ExtremaDetector,
        Method, Strategy,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::characteristics::Characteristics;
    pub use crate::detector::constraints::{
        apply_constraints, apply_count_limits, apply_value_thresholds, count_limits_exempt,
    };
    pub use crate::detector::selector::select_strategy;
    pub use crate::refine::{refine_extrema, RefineOptions};
    pub use crate::strategies::{NeighborhoodRules, StrategyParams};

    // Structured diagnostics types.
    pub use crate::detector::constraints::ConstraintDiagnostics;
    pub use crate::diagnostics::{
        ConstraintStage, InputDescriptor, RefinementStage, SelectionStage, StageTiming,
        StrategyStage, TimingBreakdown,
    };
    pub use crate::refine::RefineDiagnostics;
}
