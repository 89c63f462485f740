//! Symptom selection → one evidence vector.

use snakebite_core::constants::NO_SYMPTOMS;
use snakebite_core::{EvidenceVector, FxHashMap};

/// Sum the reference vectors of every selected symptom.
///
/// An empty selection, or one containing "No Symptoms" anywhere, yields the
/// zero vector. Duplicates each contribute again. Unknown names add nothing.
pub fn combine_symptoms<S: AsRef<str>>(
    selected: &[S],
    reference: &FxHashMap<String, EvidenceVector>,
) -> EvidenceVector {
    if selected.iter().any(|s| s.as_ref() == NO_SYMPTOMS) {
        return EvidenceVector::ZERO;
    }

    let mut combined = EvidenceVector::ZERO;
    for symptom in selected {
        match reference.get(symptom.as_ref()) {
            Some(vector) => combined += *vector,
            None => tracing::debug!(symptom = symptom.as_ref(), "unknown symptom, ignoring"),
        }
    }
    combined
}
