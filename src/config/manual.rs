use crate::manual::SnapOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ManualToolConfig {
    /// Sequence file: one value per line, or `X`/`Y` labelled sections.
    pub input: PathBuf,
    #[serde(default)]
    pub snap: SnapOptions,
    #[serde(default)]
    pub selections: SelectionConfig,
    #[serde(default)]
    pub output: ManualOutputConfig,
}

/// Approximate picks, either as sample indices or as `[x, y]` points.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub maxima: Vec<usize>,
    pub minima: Vec<usize>,
    pub maxima_points: Vec<[f64; 2]>,
    pub minima_points: Vec<[f64; 2]>,
    /// A point only selects a sample closer than this.
    pub pick_radius: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            maxima: Vec::new(),
            minima: Vec::new(),
            maxima_points: Vec::new(),
            minima_points: Vec::new(),
            pick_radius: 0.05,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ManualOutputConfig {
    pub result_json: Option<PathBuf>,
    pub result_text: Option<PathBuf>,
    pub differences_text: Option<PathBuf>,
    pub differences_csv: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ManualToolConfig, String> {
    super::read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_radius_defaults_to_ten() {
        let config: ManualToolConfig =
            serde_json::from_str(r#"{"input": "d.txt", "selections": {"maxima": [3, 7]}}"#)
                .unwrap();
        assert_eq!(config.snap.radius, 10);
        assert_eq!(config.selections.maxima, vec![3, 7]);
        assert!(config.selections.minima_points.is_empty());
        assert_eq!(config.selections.pick_radius, 0.05);
    }
}
