use thiserror::Error;

/// Invalid detection configuration, reported before any detection runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be an integer, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be >= 0, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("window size must be >= 1")]
    ZeroWindow,
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
