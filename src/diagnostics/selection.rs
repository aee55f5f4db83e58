use crate::characteristics::Characteristics;
use crate::detector::params::Method;
use crate::strategies::Strategy;
use serde::Serialize;

/// Characteristics analysis and the strategy decision it led to.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStage {
    pub elapsed_ms: f64,
    pub requested: Method,
    pub selected: Strategy,
    /// True when the strategy came from automatic selection.
    pub auto_selected: bool,
    pub characteristics: Characteristics,
}
