//! Adaptive extrema detector.
//!
//! Overview
//! - Analyses the sequence (statistics, noise proxy, oscillation and plateau
//!   flags).
//! - Resolves the requested method; `auto` picks a strategy from the
//!   characteristics through a fixed decision table.
//! - Runs the strategy, refines its candidates (dedup, spacing, quality)
//!   and applies the user's value thresholds and count limits.
//!
//! Modules
//! - [`params`] – request types used by the detector and the demo tools.
//! - [`selector`] – automatic strategy selection.
//! - [`constraints`] – value thresholds and count limits.
//! - `pipeline` – the main [`ExtremaDetector`] implementation.

pub mod constraints;
pub mod params;
mod pipeline;
pub mod selector;

pub use constraints::{apply_constraints, ConstraintDiagnostics};
pub use params::{DetectionRequest, Method, RequestFields, MIN_VALUE_UNLIMITED};
pub use pipeline::{ExtremaDetector, MIN_SEQUENCE_LEN};
pub use selector::select_strategy;
