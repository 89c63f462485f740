pub mod logging_config;
pub mod reference_tables;
pub mod scoring_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use logging_config::{LogFormat, LoggingConfig};
pub use reference_tables::ReferenceTables;
pub use scoring_config::ScoringConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SnakebiteConfig {
    pub scoring: ScoringConfig,
    pub logging: LoggingConfig,
}

impl SnakebiteConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON string, falling back to defaults for missing fields.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = read_config_file(path)?;
        match config_format(path)? {
            ConfigFormat::Toml => Self::from_toml(&contents),
            ConfigFormat::Json => Self::from_json(&contents),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigFormat {
    Toml,
    Json,
}

pub(crate) fn config_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

pub(crate) fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}
