use crate::diagnostics::{
    ConstraintStage, RefinementStage, SelectionStage, StrategyStage, TimingBreakdown,
};
use crate::types::DetectionResult;
use serde::Serialize;

/// Result produced by [`ExtremaDetector::detect_with_diagnostics`](crate::ExtremaDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub result: DetectionResult,
    pub trace: PipelineTrace,
}

/// Stage-by-stage account of one detection run.
///
/// Stage entries are `None` when the input was too short for the stage to
/// run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refinement: Option<RefinementStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ConstraintStage>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub length: usize,
    /// Sequences shorter than this produce no extrema.
    pub min_length: usize,
}
