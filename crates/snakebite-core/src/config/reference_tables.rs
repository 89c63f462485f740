//! Reference tables: categorical key → evidence vector.
//!
//! Loaded once and shared read-only. A key missing from a table is not an
//! error; the engine treats it as the zero vector.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{config_format, read_config_file, ConfigFormat};
use crate::errors::ConfigError;
use crate::types::collections::FxHashMap;
use crate::types::evidence::{Category, EvidenceVector};

/// Bundled reference data, used when no tables file is configured.
const BUILTIN_TABLES: &str = include_str!("../../data/reference_tables.toml");

/// The five reference tables. Symptoms have one table per symptom category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    /// Keyed by upper-case district name.
    pub district: FxHashMap<String, EvidenceVector>,
    pub time: FxHashMap<String, EvidenceVector>,
    pub season: FxHashMap<String, EvidenceVector>,
    pub place: FxHashMap<String, EvidenceVector>,
    pub local_symptoms: FxHashMap<String, EvidenceVector>,
    pub systemic_symptoms: FxHashMap<String, EvidenceVector>,
}

impl ReferenceTables {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let tables: Self = toml::from_str(toml_str)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let tables: Self = serde_json::from_str(json_str)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = read_config_file(path)?;
        let tables = match config_format(path)? {
            ConfigFormat::Toml => Self::from_toml(&contents)?,
            ConfigFormat::Json => Self::from_json(&contents)?,
        };
        tracing::info!(
            path = %path.display(),
            entries = tables.len(),
            "loaded reference tables"
        );
        Ok(tables)
    }

    /// The tables bundled with the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(BUILTIN_TABLES)
    }

    pub fn table(&self, category: Category) -> &FxHashMap<String, EvidenceVector> {
        match category {
            Category::District => &self.district,
            Category::Time => &self.time,
            Category::Season => &self.season,
            Category::Place => &self.place,
            Category::LocalSymptoms => &self.local_symptoms,
            Category::SystemicSymptoms => &self.systemic_symptoms,
        }
    }

    pub fn table_mut(&mut self, category: Category) -> &mut FxHashMap<String, EvidenceVector> {
        match category {
            Category::District => &mut self.district,
            Category::Time => &mut self.time,
            Category::Season => &mut self.season,
            Category::Place => &mut self.place,
            Category::LocalSymptoms => &mut self.local_symptoms,
            Category::SystemicSymptoms => &mut self.systemic_symptoms,
        }
    }

    /// Exact-key lookup. Callers own any key normalization.
    pub fn lookup(&self, category: Category, key: &str) -> Option<EvidenceVector> {
        self.table(category).get(key).copied()
    }

    /// Builder-style insert, mainly for fixtures.
    pub fn with_entry(
        mut self,
        category: Category,
        key: impl Into<String>,
        vector: impl Into<EvidenceVector>,
    ) -> Self {
        self.table_mut(category).insert(key.into(), vector.into());
        self
    }

    /// Total number of entries across all tables.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.table(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject any vector with a negative or non-finite component.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            for (key, vector) in self.table(category) {
                if !vector.is_well_formed() {
                    return Err(ConfigError::InvalidVector {
                        table: category.as_str(),
                        key: key.clone(),
                        vector: vector.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
