use crate::detector::params::{count_from_i64, DetectionRequest, Method, MIN_VALUE_UNLIMITED};
use crate::error::ConfigResult;
use crate::refine::RefineOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    /// Sequence file: one value per line, or `X`/`Y` labelled sections.
    pub input: PathBuf,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub output: DetectOutputConfig,
}

/// Detection parameters as written in the config file.
///
/// Counts are signed so that a negative value is reported as a
/// configuration error instead of a JSON type error.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub method: String,
    pub threshold: f64,
    pub window_size: i64,
    pub max_count_limit: i64,
    pub min_count_limit: i64,
    pub max_value_threshold: f64,
    pub min_value_threshold: f64,
    pub refine: RefineOptions,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        let request = DetectionRequest::default();
        Self {
            method: request.method.name().to_string(),
            threshold: request.threshold,
            window_size: request.window_size as i64,
            max_count_limit: 0,
            min_count_limit: 0,
            max_value_threshold: request.max_value_threshold,
            min_value_threshold: MIN_VALUE_UNLIMITED,
            refine: request.refine,
        }
    }
}

impl DetectionConfig {
    /// Validate into a [`DetectionRequest`].
    pub fn resolve(&self) -> ConfigResult<DetectionRequest> {
        let request = DetectionRequest {
            method: Method::from_name(&self.method),
            threshold: self.threshold,
            window_size: count_from_i64("window size", self.window_size)?,
            max_count_limit: count_from_i64("max count limit", self.max_count_limit)?,
            min_count_limit: count_from_i64("min count limit", self.min_count_limit)?,
            max_value_threshold: self.max_value_threshold,
            min_value_threshold: self.min_value_threshold,
            refine: self.refine,
        };
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetectOutputConfig {
    /// Full report with the pipeline trace.
    pub report_json: Option<PathBuf>,
    pub result_text: Option<PathBuf>,
    pub differences_text: Option<PathBuf>,
    pub differences_csv: Option<PathBuf>,
    /// Keep raw strategy candidates in the report.
    pub include_candidates: bool,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    super::read_json(path)
}
