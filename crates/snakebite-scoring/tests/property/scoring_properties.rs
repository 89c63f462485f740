//! Property-based tests for snakebite-scoring.
//!
//! - Hour bucketing is total over 0..=23 and deterministic
//! - Season mapping is total over 1..=12 and rejects everything else
//! - Symptom combining is non-negative and additive over concatenation
//! - Predictions are always a species or the insufficient-input sentinel

use std::sync::Arc;

use proptest::prelude::*;

use snakebite_core::config::{ReferenceTables, ScoringConfig};
use snakebite_core::{Category, EvidenceVector, FxHashMap, Prediction, Season, TimeBucket};
use snakebite_scoring::{
    combine_symptoms, hour_to_time_bucket, month_to_season, Evidence, PredictionBasis,
    ScoringEngine, SeededRandom,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const SYMPTOMS: [&str; 5] = ["Pain", "Swelling", "Necrosis", "Bleeding", "Hiccups"];

fn symptom_table() -> FxHashMap<String, EvidenceVector> {
    let mut table = FxHashMap::default();
    table.insert("Pain".to_string(), EvidenceVector::new([3.0, 3.0, 3.0, 0.0]));
    table.insert("Swelling".to_string(), EvidenceVector::new([3.0, 3.0, 4.0, 0.0]));
    table.insert("Necrosis".to_string(), EvidenceVector::new([4.0, 4.0, 2.0, 0.0]));
    table.insert("Bleeding".to_string(), EvidenceVector::new([0.0, 0.0, 5.0, 0.0]));
    table
}

fn arb_symptoms() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(SYMPTOMS.to_vec()), 0..8)
        .prop_map(|v| v.into_iter().map(String::from).collect())
}

fn arb_evidence() -> impl Strategy<Value = Evidence> {
    (
        prop::option::of(prop::sample::select(vec!["CHENNAI", "madurai", "ATLANTIS", ""])),
        prop::option::of(prop::sample::select(TimeBucket::ALL.to_vec())),
        prop::option::of(prop::sample::select(Season::ALL.to_vec())),
        prop::option::of(prop::sample::select(vec!["Foot", "Hand", "Roof", ""])),
        arb_symptoms(),
        arb_symptoms(),
        any::<bool>(),
    )
        .prop_map(|(district, time, season, place, local, systemic, has_image)| Evidence {
            district: district.map(String::from),
            time,
            season,
            place: place.map(String::from),
            local_symptoms: local,
            systemic_symptoms: systemic,
            has_image,
        })
}

fn engine() -> ScoringEngine<SeededRandom> {
    let mut tables = ReferenceTables::default()
        .with_entry(Category::District, "CHENNAI", [5.0, 1.0, 0.0, 0.0])
        .with_entry(Category::District, "MADURAI", [0.0, 4.0, 4.0, 3.0])
        .with_entry(Category::Time, "Night", [1.0, 1.0, 3.0, 5.0])
        .with_entry(Category::Time, "During the day", [3.0, 3.0, 2.0, 0.0])
        .with_entry(Category::Season, "Monsoon", [3.0, 3.0, 3.0, 4.0])
        .with_entry(Category::Place, "Foot", [2.0, 2.0, 4.0, 1.0])
        .with_entry(Category::Place, "Hand", [3.0, 3.0, 2.0, 1.0]);
    tables.local_symptoms = symptom_table();
    tables.systemic_symptoms = symptom_table();
    ScoringEngine::with_random(Arc::new(tables), ScoringConfig::default(), SeededRandom::new(1))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Normalizers
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn prop_hour_bucketing_total_and_deterministic(hour in 0u32..=23) {
        let first = hour_to_time_bucket(hour).unwrap();
        let second = hour_to_time_bucket(hour).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(TimeBucket::ALL.contains(&first));
    }

    #[test]
    fn prop_hour_above_23_rejected(hour in 24u32..) {
        prop_assert!(hour_to_time_bucket(hour).is_err());
    }

    #[test]
    fn prop_season_total_over_calendar(month in 1u32..=12) {
        prop_assert!(month_to_season(month).is_ok());
    }

    #[test]
    fn prop_season_rejects_out_of_range(month in prop_oneof![Just(0u32), 13u32..]) {
        prop_assert!(month_to_season(month).is_err());
    }
}

// ---------------------------------------------------------------------------
// Symptom combiner
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn prop_combined_symptoms_non_negative(selected in arb_symptoms()) {
        let combined = combine_symptoms(&selected, &symptom_table());
        prop_assert!(combined.is_well_formed());
    }

    #[test]
    fn prop_combining_is_additive(a in arb_symptoms(), b in arb_symptoms()) {
        let table = symptom_table();
        let joined: Vec<String> = a.iter().chain(b.iter()).cloned().collect();
        let whole = combine_symptoms(&joined, &table);
        let parts = combine_symptoms(&a, &table) + combine_symptoms(&b, &table);
        for i in 0..4 {
            prop_assert!((whole[i] - parts[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_sentinel_always_zero(mut selected in arb_symptoms(), at in 0usize..8) {
        let at = at.min(selected.len());
        selected.insert(at, "No Symptoms".to_string());
        prop_assert!(combine_symptoms(&selected, &symptom_table()).is_zero());
    }
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn prop_prediction_is_species_or_sentinel(evidence in arb_evidence()) {
        let assessment = engine().assess(&evidence);
        match assessment.basis {
            PredictionBasis::InsufficientInput => {
                prop_assert_eq!(assessment.prediction, Prediction::InsufficientInput);
                prop_assert!(assessment.contributions.is_empty());
                prop_assert!(!evidence.has_image);
            }
            _ => prop_assert!(assessment.prediction.species().is_some()),
        }
    }

    #[test]
    fn prop_probabilities_sum_to_100(evidence in arb_evidence()) {
        let assessment = engine().assess(&evidence);
        if let Some(probs) = assessment.probabilities {
            let sum: f64 = probs.iter().sum();
            prop_assert!((sum - 100.0).abs() < 1e-6);
            let label = assessment.prediction.species().unwrap();
            let best = probs[label.index()];
            prop_assert!(probs.iter().all(|&p| p <= best));
        }
    }

    #[test]
    fn prop_weights_follow_contribution_position(evidence in arb_evidence()) {
        let engine = engine();
        let contributions = engine.contributions(&evidence);
        prop_assert!(contributions.len() <= 6);
        for (position, contribution) in contributions.iter().enumerate() {
            prop_assert_eq!(contribution.weight, engine.config().weight_at(position));
        }
    }
}
