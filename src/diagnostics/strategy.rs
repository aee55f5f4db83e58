use crate::strategies::{Strategy, StrategyParams};
use crate::types::Extrema;
use serde::Serialize;

/// Raw output of the executed strategy, before refinement.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyStage {
    pub elapsed_ms: f64,
    pub strategy: Strategy,
    pub params: StrategyParams,
    pub raw_minima: usize,
    pub raw_maxima: usize,
    /// Raw candidates, kept only when the caller asks for them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Extrema>,
}
