//! Species labels and the engine's output type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::INSUFFICIENT_INPUT;
use crate::errors::ScoringError;

/// One of the four species the engine can name.
///
/// Declaration order is significant: it is the evidence-vector index order
/// and the tie-break order for the arg-max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpeciesLabel {
    #[serde(rename = "Monocled Cobra")]
    MonocledCobra,
    #[serde(rename = "Spectacled Cobra")]
    SpectacledCobra,
    #[serde(rename = "Russell's Viper")]
    RussellsViper,
    #[serde(rename = "Krait Species")]
    Krait,
}

impl SpeciesLabel {
    pub const ALL: [SpeciesLabel; 4] = [
        Self::MonocledCobra,
        Self::SpectacledCobra,
        Self::RussellsViper,
        Self::Krait,
    ];

    /// Vector index of this label.
    pub fn index(self) -> usize {
        match self {
            Self::MonocledCobra => 0,
            Self::SpectacledCobra => 1,
            Self::RussellsViper => 2,
            Self::Krait => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MonocledCobra => "Monocled Cobra",
            Self::SpectacledCobra => "Spectacled Cobra",
            Self::RussellsViper => "Russell's Viper",
            Self::Krait => "Krait Species",
        }
    }
}

impl fmt::Display for SpeciesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpeciesLabel {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ScoringError::InvalidArgument {
                argument: "species",
                value: s.to_string(),
                expected: "one of the four species labels",
            })
    }
}

/// Result of a classification: a species, or the insufficient-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Prediction {
    Species(SpeciesLabel),
    InsufficientInput,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Species(label) => label.as_str(),
            Self::InsufficientInput => INSUFFICIENT_INPUT,
        }
    }

    pub fn species(&self) -> Option<SpeciesLabel> {
        match self {
            Self::Species(label) => Some(*label),
            Self::InsufficientInput => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientInput)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SpeciesLabel> for Prediction {
    fn from(label: SpeciesLabel) -> Self {
        Self::Species(label)
    }
}

impl From<Prediction> for String {
    fn from(prediction: Prediction) -> Self {
        prediction.as_str().to_string()
    }
}

impl FromStr for Prediction {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == INSUFFICIENT_INPUT {
            return Ok(Self::InsufficientInput);
        }
        s.parse::<SpeciesLabel>().map(Self::Species)
    }
}

impl TryFrom<String> for Prediction {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
