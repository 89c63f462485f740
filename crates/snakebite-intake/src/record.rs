//! The flat incident record kept by the store, one row per submission.

use serde::{Deserialize, Serialize};

use snakebite_core::Prediction;
use snakebite_scoring::Evidence;

use crate::details::BiteDetails;
use crate::identity::VictimIdentity;

/// Column headers, in store order.
pub const COLUMNS: [&str; 16] = [
    "Name",
    "Age",
    "Sex",
    "Phone",
    "Address",
    "District",
    "Time",
    "Season",
    "Place",
    "Local symptoms",
    "Systematic symptoms",
    "Prediction",
    "Image URL",
    "Notes",
    "Clinical Snake",
    "Clinical Notes",
];

const LIST_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Place")]
    pub place: String,
    #[serde(rename = "Local symptoms")]
    pub local_symptoms: String,
    #[serde(rename = "Systematic symptoms")]
    pub systemic_symptoms: String,
    #[serde(rename = "Prediction")]
    pub prediction: String,
    #[serde(rename = "Image URL")]
    pub image_url: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Clinical Snake")]
    pub clinical_snake: String,
    #[serde(rename = "Clinical Notes")]
    pub clinical_notes: String,
}

impl IncidentRecord {
    /// Build a record from the form, the evidence derived from it, and the
    /// engine's prediction. Clinical fields start empty.
    pub fn assemble(
        identity: &VictimIdentity,
        details: &BiteDetails,
        evidence: &Evidence,
        prediction: Prediction,
        image_url: Option<&str>,
    ) -> Self {
        Self {
            name: identity.name.clone(),
            age: identity.age.clone(),
            sex: identity.sex.clone(),
            phone: identity.phone.clone(),
            address: identity.address.clone(),
            district: details.district.clone(),
            time: evidence.time.map(|t| t.to_string()).unwrap_or_default(),
            season: evidence.season.map(|s| s.to_string()).unwrap_or_default(),
            place: details.final_place().to_string(),
            local_symptoms: evidence.local_symptoms.join(LIST_SEPARATOR),
            systemic_symptoms: evidence.systemic_symptoms.join(LIST_SEPARATOR),
            prediction: prediction.to_string(),
            image_url: image_url.unwrap_or_default().to_string(),
            notes: details.notes.clone(),
            clinical_snake: String::new(),
            clinical_notes: String::new(),
        }
    }

    /// Attach the clinician's identification of the snake.
    pub fn with_clinical_confirmation(
        mut self,
        snake: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        self.clinical_snake = snake.into();
        self.clinical_notes = notes.into();
        self
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn to_row(&self) -> Vec<String> {
        [
            &self.name,
            &self.age,
            &self.sex,
            &self.phone,
            &self.address,
            &self.district,
            &self.time,
            &self.season,
            &self.place,
            &self.local_symptoms,
            &self.systemic_symptoms,
            &self.prediction,
            &self.image_url,
            &self.notes,
            &self.clinical_snake,
            &self.clinical_notes,
        ]
        .into_iter()
        .cloned()
        .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
