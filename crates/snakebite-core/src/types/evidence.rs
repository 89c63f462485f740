//! Evidence vectors and the categories that contribute them.

use std::fmt;
use std::ops::{Add, AddAssign, Index};

use serde::{Deserialize, Serialize};

use super::species::SpeciesLabel;
use crate::constants::SPECIES_COUNT;

/// Four non-negative weights, index-aligned to [`SpeciesLabel::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceVector([f64; SPECIES_COUNT]);

impl EvidenceVector {
    pub const ZERO: EvidenceVector = EvidenceVector([0.0; SPECIES_COUNT]);

    pub const fn new(components: [f64; SPECIES_COUNT]) -> Self {
        Self(components)
    }

    pub fn components(&self) -> [f64; SPECIES_COUNT] {
        self.0
    }

    pub fn get(&self, label: SpeciesLabel) -> f64 {
        self.0[label.index()]
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.map(|v| v * factor))
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    /// True when every component is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.0.iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl From<[f64; SPECIES_COUNT]> for EvidenceVector {
    fn from(components: [f64; SPECIES_COUNT]) -> Self {
        Self(components)
    }
}

impl Index<usize> for EvidenceVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl Add for EvidenceVector {
    type Output = EvidenceVector;

    fn add(mut self, rhs: EvidenceVector) -> EvidenceVector {
        self += rhs;
        self
    }
}

impl AddAssign for EvidenceVector {
    fn add_assign(&mut self, rhs: EvidenceVector) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl fmt::Display for EvidenceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

/// The six evidence categories, in contribution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    District,
    Time,
    Season,
    Place,
    LocalSymptoms,
    SystemicSymptoms,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::District,
        Self::Time,
        Self::Season,
        Self::Place,
        Self::LocalSymptoms,
        Self::SystemicSymptoms,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::District => "district",
            Self::Time => "time",
            Self::Season => "season",
            Self::Place => "place",
            Self::LocalSymptoms => "local_symptoms",
            Self::SystemicSymptoms => "systemic_symptoms",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
