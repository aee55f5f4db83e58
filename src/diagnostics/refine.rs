use crate::refine::RefineDiagnostics;
use serde::Serialize;

/// Report of the dedup / spacing / quality refinement.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementStage {
    pub elapsed_ms: f64,
    #[serde(flatten)]
    pub counts: RefineDiagnostics,
}
