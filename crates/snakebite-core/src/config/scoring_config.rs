//! Scoring engine configuration.

use serde::{Deserialize, Serialize};

use super::reference_tables::ReferenceTables;
use crate::constants::{DEFAULT_CATEGORY_WEIGHTS, DEFAULT_OVERFLOW_WEIGHT};
use crate::errors::ConfigError;

/// Weights and reference-table location for the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight applied to the n-th contributed evidence vector.
    /// Positional: indexed by contribution order, not by category.
    pub category_weights: Vec<f64>,
    /// Weight for contributed positions past the end of `category_weights`.
    pub overflow_weight: f64,
    /// Reference tables file (`.toml` or `.json`). Default: the bundled tables.
    pub reference_tables_path: Option<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            category_weights: DEFAULT_CATEGORY_WEIGHTS.to_vec(),
            overflow_weight: DEFAULT_OVERFLOW_WEIGHT,
            reference_tables_path: None,
        }
    }
}

impl ScoringConfig {
    /// Weight for the vector at `position` in the contributed list.
    pub fn weight_at(&self, position: usize) -> f64 {
        self.category_weights
            .get(position)
            .copied()
            .unwrap_or(self.overflow_weight)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.category_weights.is_empty() {
            return Err(ConfigError::EmptyWeights);
        }
        for (position, &weight) in self.category_weights.iter().enumerate() {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(ConfigError::InvalidWeight { position, weight });
            }
        }
        if !(self.overflow_weight.is_finite() && self.overflow_weight > 0.0) {
            return Err(ConfigError::InvalidOverflowWeight(self.overflow_weight));
        }
        Ok(())
    }

    /// Load the configured reference tables, or the bundled ones if no path is set.
    pub fn load_reference_tables(&self) -> Result<ReferenceTables, ConfigError> {
        match &self.reference_tables_path {
            Some(path) => ReferenceTables::load(path),
            None => ReferenceTables::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_at_falls_back_past_the_list() {
        let config = ScoringConfig::default();
        assert_eq!(config.weight_at(0), 0.8);
        assert_eq!(config.weight_at(3), 0.5);
        assert_eq!(config.weight_at(5), 0.8);
        assert_eq!(config.weight_at(6), 1.0);
        assert_eq!(config.weight_at(100), 1.0);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let config = ScoringConfig {
            category_weights: vec![0.8, 0.0],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeight { position: 1, .. })
        ));
    }
}
