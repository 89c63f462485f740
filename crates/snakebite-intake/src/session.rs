//! One intake submission, end to end.

use serde::{Deserialize, Serialize};

use snakebite_core::errors::IntakeResult;
use snakebite_core::{Prediction, RandomSource};
use snakebite_scoring::{ScoringEngine, ThreadRandom};

use crate::details::BiteDetails;
use crate::identity::VictimIdentity;
use crate::record::IncidentRecord;

/// Outcome of a submission: the prediction and the record to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub prediction: Prediction,
    pub record: IncidentRecord,
}

/// Runs submissions against a shared engine.
pub struct IntakeSession<R: RandomSource = ThreadRandom> {
    engine: ScoringEngine<R>,
}

impl<R: RandomSource> IntakeSession<R> {
    pub fn new(engine: ScoringEngine<R>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ScoringEngine<R> {
        &self.engine
    }

    /// Validate the identity, classify the bite, and assemble the record.
    pub fn submit(
        &self,
        identity: &VictimIdentity,
        details: &BiteDetails,
        image_url: Option<&str>,
    ) -> IntakeResult<Submission> {
        identity.validate()?;
        let evidence = details.to_evidence()?;
        let prediction = self.engine.predict(&evidence);
        tracing::info!(%prediction, district = %details.district, "incident classified");

        let record = IncidentRecord::assemble(identity, details, &evidence, prediction, image_url);
        Ok(Submission { prediction, record })
    }
}
