//! Configuration and reference-table loading errors.

use super::error_code::SnakebiteErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error("{table} table entry {key:?} has a negative or non-finite component: {vector}")]
    InvalidVector {
        table: &'static str,
        key: String,
        vector: String,
    },

    #[error("category weight at position {position} must be positive and finite, got {weight}")]
    InvalidWeight { position: usize, weight: f64 },

    #[error("overflow weight must be positive and finite, got {0}")]
    InvalidOverflowWeight(f64),

    #[error("category weight list is empty")]
    EmptyWeights,
}

impl SnakebiteErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CONFIG_IO",
            Self::Toml(_) => "CONFIG_TOML",
            Self::Json(_) => "CONFIG_JSON",
            Self::UnsupportedFormat { .. } => "CONFIG_UNSUPPORTED_FORMAT",
            Self::InvalidVector { .. } => "CONFIG_INVALID_VECTOR",
            Self::InvalidWeight { .. } => "CONFIG_INVALID_WEIGHT",
            Self::InvalidOverflowWeight(_) => "CONFIG_INVALID_OVERFLOW_WEIGHT",
            Self::EmptyWeights => "CONFIG_EMPTY_WEIGHTS",
        }
    }
}
