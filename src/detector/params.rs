//! Parameter types configuring a detection run.
//!
//! [`DetectionRequest`] is the validated configuration consumed by the
//! detector. [`RequestFields`] is its raw textual form, as typed into an
//! external form; [`RequestFields::parse`] turns it into a request or a
//! [`ConfigError`] without running any detection.

use crate::error::{ConfigError, ConfigResult};
use crate::refine::RefineOptions;
use crate::strategies::{Strategy, StrategyParams};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel meaning "no ceiling" for [`DetectionRequest::min_value_threshold`].
pub const MIN_VALUE_UNLIMITED: f64 = 999.0;

/// Requested detection method: automatic selection or one fixed strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Method {
    #[default]
    Auto,
    Fixed(Strategy),
}

impl Method {
    /// Parse a method name. Unknown names fall back to the enhanced strategy.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Method::Auto;
        }
        match Strategy::from_name(trimmed) {
            Some(strategy) => Method::Fixed(strategy),
            None => {
                warn!("unknown detection method {trimmed:?}, falling back to enhanced");
                Method::Fixed(Strategy::Enhanced)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Auto => "auto",
            Method::Fixed(s) => s.name(),
        }
    }

    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Method::Auto => None,
            Method::Fixed(s) => Some(*s),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Strategy> for Method {
    fn from(s: Strategy) -> Self {
        Method::Fixed(s)
    }
}

impl From<Method> for String {
    fn from(m: Method) -> Self {
        m.name().to_string()
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Method::from_name(&name))
    }
}

/// Validated configuration of one detection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionRequest {
    pub method: Method,
    /// Strategy tolerance (`>= 0`).
    pub threshold: f64,
    /// Half-width of the `window` strategy (`>= 1`).
    pub window_size: usize,
    /// Keep at most this many maxima (0 = unlimited).
    pub max_count_limit: usize,
    /// Keep at most this many minima (0 = unlimited).
    pub min_count_limit: usize,
    /// Keep maxima `>=` this value (0 = unlimited).
    pub max_value_threshold: f64,
    /// Keep minima `<=` this value ([`MIN_VALUE_UNLIMITED`] = unlimited).
    pub min_value_threshold: f64,
    pub refine: RefineOptions,
}

impl Default for DetectionRequest {
    fn default() -> Self {
        Self {
            method: Method::Auto,
            threshold: 1e-4,
            window_size: 3,
            max_count_limit: 0,
            min_count_limit: 0,
            max_value_threshold: 0.0,
            min_value_threshold: MIN_VALUE_UNLIMITED,
            refine: RefineOptions::default(),
        }
    }
}

impl DetectionRequest {
    pub fn with_method(mut self, method: impl Into<Method>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_count_limits(mut self, max_count: usize, min_count: usize) -> Self {
        self.max_count_limit = max_count;
        self.min_count_limit = min_count;
        self
    }

    pub fn with_value_thresholds(mut self, max_value: f64, min_value: f64) -> Self {
        self.max_value_threshold = max_value;
        self.min_value_threshold = min_value;
        self
    }

    /// Parameters handed to the strategies.
    pub fn strategy_params(&self) -> StrategyParams {
        StrategyParams {
            threshold: self.threshold,
            window_size: self.window_size,
        }
    }

    /// Check the numeric domains of every field.
    pub fn validate(&self) -> ConfigResult<()> {
        finite("threshold", self.threshold)?;
        if self.threshold < 0.0 {
            return Err(ConfigError::Negative {
                field: "threshold",
                value: self.threshold,
            });
        }
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        finite("max value threshold", self.max_value_threshold)?;
        finite("min value threshold", self.min_value_threshold)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> ConfigResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

/// Raw, unvalidated request fields as free text.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestFields {
    pub method: String,
    pub threshold: String,
    pub window_size: String,
    pub max_count_limit: String,
    pub min_count_limit: String,
    pub max_value_threshold: String,
    pub min_value_threshold: String,
}

impl Default for RequestFields {
    fn default() -> Self {
        Self {
            method: "auto".into(),
            threshold: "0.0001".into(),
            window_size: "3".into(),
            max_count_limit: "0".into(),
            min_count_limit: "0".into(),
            max_value_threshold: "0.0".into(),
            min_value_threshold: "999".into(),
        }
    }
}

impl RequestFields {
    /// Validate the text fields into a [`DetectionRequest`].
    pub fn parse(&self) -> ConfigResult<DetectionRequest> {
        let request = DetectionRequest {
            method: Method::from_name(&self.method),
            threshold: parse_real("threshold", &self.threshold)?,
            window_size: parse_count("window size", &self.window_size)?,
            max_count_limit: parse_count("max count limit", &self.max_count_limit)?,
            min_count_limit: parse_count("min count limit", &self.min_count_limit)?,
            max_value_threshold: parse_real("max value threshold", &self.max_value_threshold)?,
            min_value_threshold: parse_real("min value threshold", &self.min_value_threshold)?,
            refine: RefineOptions::default(),
        };
        request.validate()?;
        Ok(request)
    }
}

fn parse_real(field: &'static str, text: &str) -> ConfigResult<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::NotANumber {
            field,
            value: text.to_string(),
        })?;
    finite(field, value)
}

/// Parse a non-negative integer, reporting negative values distinctly.
pub(crate) fn parse_count(field: &'static str, text: &str) -> ConfigResult<usize> {
    let value = text
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::NotAnInteger {
            field,
            value: text.to_string(),
        })?;
    count_from_i64(field, value)
}

pub(crate) fn count_from_i64(field: &'static str, value: i64) -> ConfigResult<usize> {
    usize::try_from(value).map_err(|_| ConfigError::Negative {
        field,
        value: value as f64,
    })
}
