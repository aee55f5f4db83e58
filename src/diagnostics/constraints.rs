use crate::detector::constraints::ConstraintDiagnostics;
use serde::Serialize;

/// Report of the threshold and count-limit filters.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintStage {
    pub elapsed_ms: f64,
    #[serde(flatten)]
    pub counts: ConstraintDiagnostics,
}
