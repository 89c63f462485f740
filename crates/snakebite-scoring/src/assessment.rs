//! The full record of one classification decision.

use serde::{Deserialize, Serialize};

use snakebite_core::{Category, EvidenceVector, Prediction};

/// One evidence vector that entered the weighted sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub category: Category,
    pub vector: EvidenceVector,
    /// Weight for this vector's position in the contributed list.
    pub weight: f64,
    /// False when the key was supplied but missing from its table.
    pub resolved: bool,
}

/// How the prediction was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionBasis {
    /// Arg-max over weighted evidence.
    Evidence,
    /// No evidence supplied, but an image was attached: uniform random pick.
    ImageFallback,
    /// Evidence supplied but every vector summed to zero: uniform random pick.
    UnresolvedFallback,
    /// No evidence supplied and no image.
    InsufficientInput,
}

impl PredictionBasis {
    pub fn is_random(self) -> bool {
        matches!(self, Self::ImageFallback | Self::UnresolvedFallback)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub contributions: Vec<Contribution>,
    /// Weighted score per species, in label order.
    pub scores: [f64; 4],
    pub total: f64,
    /// Percentages in label order; `None` unless the basis is `Evidence`.
    pub probabilities: Option<[f64; 4]>,
    pub prediction: Prediction,
    pub basis: PredictionBasis,
}
