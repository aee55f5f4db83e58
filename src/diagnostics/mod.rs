//! Diagnostics data model exposed by the detector and the demo tools.
//!
//! [`DetectionReport`] is the entry point: the compact
//! [`DetectionResult`](crate::types::DetectionResult) plus a
//! [`PipelineTrace`] describing each stage the pipeline executed, with
//! timings.

pub mod constraints;
pub mod pipeline;
pub mod refine;
pub mod selection;
pub mod strategy;
pub mod timing;

pub use constraints::ConstraintStage;
pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use refine::RefinementStage;
pub use selection::SelectionStage;
pub use strategy::StrategyStage;
pub use timing::{StageTiming, TimingBreakdown};
