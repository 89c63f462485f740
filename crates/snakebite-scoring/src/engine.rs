//! ScoringEngine — weighted arg-max over categorical evidence.

use std::sync::Arc;

use snakebite_core::config::{ReferenceTables, ScoringConfig};
use snakebite_core::constants::SPECIES_COUNT;
use snakebite_core::errors::{ConfigError, ScoringResult};
use snakebite_core::{Category, EvidenceVector, Prediction, RandomSource, SpeciesLabel};

use crate::assessment::{Assessment, Contribution, PredictionBasis};
use crate::evidence::{Evidence, IncidentInput};
use crate::random::ThreadRandom;
use crate::symptoms::combine_symptoms;

/// The scoring engine.
///
/// Holds immutable reference tables and weights; every call is independent.
/// The random source is only consulted on the two fallback paths.
#[derive(Debug, Clone)]
pub struct ScoringEngine<R: RandomSource = ThreadRandom> {
    tables: Arc<ReferenceTables>,
    config: ScoringConfig,
    random: R,
}

impl ScoringEngine<ThreadRandom> {
    /// Create an engine drawing fallback picks from the thread-local generator.
    pub fn new(tables: Arc<ReferenceTables>, config: ScoringConfig) -> Result<Self, ConfigError> {
        Self::with_random(tables, config, ThreadRandom)
    }

    /// Load the reference tables `config` points at and build an engine.
    pub fn from_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        let tables = config.load_reference_tables()?;
        Self::new(Arc::new(tables), config)
    }
}

impl<R: RandomSource> ScoringEngine<R> {
    /// Rejects non-positive weights and negative or non-finite table vectors.
    pub fn with_random(
        tables: Arc<ReferenceTables>,
        config: ScoringConfig,
        random: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        tables.validate()?;
        Ok(Self {
            tables,
            config,
            random,
        })
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Classify `evidence`.
    pub fn predict(&self, evidence: &Evidence) -> Prediction {
        self.assess(evidence).prediction
    }

    /// Validate boundary input, then classify it.
    pub fn predict_input(&self, input: &IncidentInput) -> ScoringResult<Prediction> {
        let evidence = Evidence::from_input(input)?;
        Ok(self.predict(&evidence))
    }

    /// Classify `evidence` and return the full breakdown.
    #[tracing::instrument(level = "debug", skip_all, fields(has_image = evidence.has_image))]
    pub fn assess(&self, evidence: &Evidence) -> Assessment {
        let contributions = self.contributions(evidence);

        if contributions.is_empty() {
            let (prediction, basis) = if evidence.has_image {
                tracing::debug!("no evidence supplied, image attached: random pick");
                (self.random_label(), PredictionBasis::ImageFallback)
            } else {
                tracing::debug!("no evidence supplied and no image");
                (Prediction::InsufficientInput, PredictionBasis::InsufficientInput)
            };
            return Assessment {
                contributions,
                scores: [0.0; SPECIES_COUNT],
                total: 0.0,
                probabilities: None,
                prediction,
                basis,
            };
        }

        let mut weighted = EvidenceVector::ZERO;
        for contribution in &contributions {
            weighted += contribution.vector.scaled(contribution.weight);
        }
        let scores = weighted.components();
        let total = weighted.sum();

        if total == 0.0 {
            tracing::debug!(
                contributed = contributions.len(),
                "evidence resolved to zero: random pick"
            );
            return Assessment {
                contributions,
                scores,
                total,
                probabilities: None,
                prediction: self.random_label(),
                basis: PredictionBasis::UnresolvedFallback,
            };
        }

        // Arg-max over raw scores: `total` can overflow to infinity even when
        // every score is finite.
        let probabilities = scores.map(|score| score / total * 100.0);
        let label = SpeciesLabel::ALL[arg_max(&scores)];
        tracing::debug!(%label, ?probabilities, "classified");

        Assessment {
            contributions,
            scores,
            total,
            probabilities: Some(probabilities),
            prediction: Prediction::Species(label),
            basis: PredictionBasis::Evidence,
        }
    }

    /// Contributed vectors in category order, each with its positional weight.
    ///
    /// Weights follow position in this list, not category identity: if the
    /// district is absent, the next contributed category takes the first weight.
    pub fn contributions(&self, evidence: &Evidence) -> Vec<Contribution> {
        let mut collected: Vec<(Category, EvidenceVector, bool)> = Vec::with_capacity(6);

        if let Some(district) = evidence.district() {
            let found = self.tables.lookup(Category::District, &district.to_uppercase());
            collected.push(resolve(Category::District, district, found));
        }

        // Time and season contribute only when their bucket has a table entry.
        if let Some(time) = evidence.time {
            if let Some(vector) = self.tables.lookup(Category::Time, time.as_str()) {
                collected.push((Category::Time, vector, true));
            }
        }
        if let Some(season) = evidence.season {
            if let Some(vector) = self.tables.lookup(Category::Season, season.as_str()) {
                collected.push((Category::Season, vector, true));
            }
        }

        if let Some(place) = evidence.place() {
            let found = self.tables.lookup(Category::Place, place);
            collected.push(resolve(Category::Place, place, found));
        }

        if !evidence.local_symptoms.is_empty() {
            let vector = combine_symptoms(&evidence.local_symptoms, &self.tables.local_symptoms);
            collected.push((Category::LocalSymptoms, vector, true));
        }
        if !evidence.systemic_symptoms.is_empty() {
            let vector =
                combine_symptoms(&evidence.systemic_symptoms, &self.tables.systemic_symptoms);
            collected.push((Category::SystemicSymptoms, vector, true));
        }

        collected
            .into_iter()
            .enumerate()
            .map(|(position, (category, vector, resolved))| {
                let weight = self.config.weight_at(position);
                tracing::trace!(%category, %vector, weight, "contribution");
                Contribution {
                    category,
                    vector,
                    weight,
                    resolved,
                }
            })
            .collect()
    }

    fn random_label(&self) -> Prediction {
        let index = self.random.pick_index(SPECIES_COUNT) % SPECIES_COUNT;
        Prediction::Species(SpeciesLabel::ALL[index])
    }
}

/// Unknown keys still contribute, as the zero vector.
fn resolve(
    category: Category,
    key: &str,
    found: Option<EvidenceVector>,
) -> (Category, EvidenceVector, bool) {
    match found {
        Some(vector) => (category, vector, true),
        None => {
            tracing::debug!(%category, key, "key not in reference table, contributing zero");
            (category, EvidenceVector::ZERO, false)
        }
    }
}

/// Index of the first maximum.
fn arg_max(values: &[f64; SPECIES_COUNT]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}
