//! Detector pipeline driving extrema detection end-to-end.
//!
//! The [`ExtremaDetector`] exposes a simple API: feed a sequence and get the
//! refined, constrained extrema together with the characteristics that
//! drove the strategy choice. Internally it runs characteristics analysis,
//! optional automatic selection, the chosen strategy, refinement and the
//! user constraints, in that order.
//!
//! Typical usage:
//! ```
//! use extrema_detector::{DetectionRequest, ExtremaDetector};
//!
//! let seq = [0.0, 5.0, 1.0, 6.0, 2.0, 7.0, 0.0];
//! let detector = ExtremaDetector::new(DetectionRequest::default());
//! let result = detector.detect(&seq);
//! assert_eq!(result.extrema.maxima.len(), 3);
//! ```
use super::constraints::apply_constraints;
use super::params::{DetectionRequest, Method};
use super::selector::select_strategy;
use crate::characteristics::Characteristics;
use crate::diagnostics::{
    ConstraintStage, DetectionReport, InputDescriptor, PipelineTrace, RefinementStage,
    SelectionStage, StrategyStage, TimingBreakdown,
};
use crate::refine::refine_extrema;
use crate::strategies::Strategy;
use crate::types::{DetectionResult, Extrema};
use log::debug;
use std::time::Instant;

/// Sequences shorter than this produce no extrema.
pub const MIN_SEQUENCE_LEN: usize = 3;

/// Adaptive local-extrema detector.
///
/// Holds only its request; every call recomputes from scratch.
#[derive(Clone, Debug, Default)]
pub struct ExtremaDetector {
    request: DetectionRequest,
    keep_candidates: bool,
}

impl ExtremaDetector {
    /// Create a detector for the supplied request.
    pub fn new(request: DetectionRequest) -> Self {
        Self {
            request,
            keep_candidates: false,
        }
    }

    /// Keep the raw strategy candidates in the diagnostics trace.
    pub fn with_candidates(mut self, keep: bool) -> Self {
        self.keep_candidates = keep;
        self
    }

    pub fn request(&self) -> &DetectionRequest {
        &self.request
    }

    pub fn set_request(&mut self, request: DetectionRequest) {
        self.request = request;
    }

    /// Strategy that would run for `characteristics` under the current request.
    pub fn resolve_strategy(&self, characteristics: &Characteristics) -> Strategy {
        match self.request.method {
            Method::Auto => select_strategy(characteristics),
            Method::Fixed(strategy) => strategy,
        }
    }

    /// Run the detector on `seq`, returning a compact result.
    pub fn detect(&self, seq: &[f64]) -> DetectionResult {
        self.detect_with_diagnostics(seq).result
    }

    /// Run the detector and return both the result and a detailed report.
    pub fn detect_with_diagnostics(&self, seq: &[f64]) -> DetectionReport {
        debug!(
            "ExtremaDetector::detect start len={} method={}",
            seq.len(),
            self.request.method
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let input = InputDescriptor {
            length: seq.len(),
            min_length: MIN_SEQUENCE_LEN,
        };

        if seq.len() < MIN_SEQUENCE_LEN {
            let characteristics = Characteristics::default();
            let method = self.resolve_strategy(&characteristics);
            debug!(
                "ExtremaDetector::detect input shorter than {} -> empty result",
                MIN_SEQUENCE_LEN
            );
            timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
            return DetectionReport {
                result: DetectionResult {
                    requested: self.request.method,
                    method,
                    characteristics,
                    extrema: Extrema::default(),
                },
                trace: PipelineTrace {
                    input,
                    timings,
                    selection: None,
                    strategy: None,
                    refinement: None,
                    constraints: None,
                },
            };
        }

        let ((characteristics, method), selection_ms) = timings.measure("selection", || {
            let characteristics = Characteristics::analyze(seq);
            let method = self.resolve_strategy(&characteristics);
            (characteristics, method)
        });
        debug!(
            "ExtremaDetector::detect selected={} noise={:.6} density={:.3} oscillatory={} plateaus={}",
            method,
            characteristics.noise_level,
            characteristics.extrema_density,
            characteristics.is_oscillatory,
            characteristics.has_plateaus
        );
        let selection = SelectionStage {
            elapsed_ms: selection_ms,
            requested: self.request.method,
            selected: method,
            auto_selected: self.request.method == Method::Auto,
            characteristics: characteristics.clone(),
        };

        let params = self.request.strategy_params();
        let (raw, strategy_ms) = timings.measure("strategy", || method.detect(seq, &params));
        debug!(
            "ExtremaDetector::detect strategy={} raw maxima={} minima={}",
            method,
            raw.maxima.len(),
            raw.minima.len()
        );
        let strategy = StrategyStage {
            elapsed_ms: strategy_ms,
            strategy: method,
            params,
            raw_minima: raw.minima.len(),
            raw_maxima: raw.maxima.len(),
            candidates: self.keep_candidates.then(|| raw.clone()),
        };

        let ((refined, refine_diag), refine_ms) = timings.measure("refinement", || {
            refine_extrema(raw, seq, characteristics.noise_level, &self.request.refine)
        });
        debug!(
            "ExtremaDetector::detect refined maxima={} minima={} min_distance={} quality={}",
            refined.maxima.len(),
            refined.minima.len(),
            refine_diag.min_distance,
            refine_diag.quality_applied
        );

        let ((extrema, constraint_diag), constraints_ms) = timings.measure("constraints", || {
            apply_constraints(refined, &self.request)
        });

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "ExtremaDetector::detect done maxima={} minima={} latency_ms={:.3}",
            extrema.maxima.len(),
            extrema.minima.len(),
            timings.total_ms
        );

        DetectionReport {
            result: DetectionResult {
                requested: self.request.method,
                method,
                characteristics,
                extrema,
            },
            trace: PipelineTrace {
                input,
                timings,
                selection: Some(selection),
                strategy: Some(strategy),
                refinement: Some(RefinementStage {
                    elapsed_ms: refine_ms,
                    counts: refine_diag,
                }),
                constraints: Some(ConstraintStage {
                    elapsed_ms: constraints_ms,
                    counts: constraint_diag,
                }),
            },
        }
    }
}
