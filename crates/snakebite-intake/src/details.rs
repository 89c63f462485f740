//! Bite details as entered on the intake form.

use serde::{Deserialize, Serialize};

use snakebite_core::errors::{IntakeError, IntakeResult};
use snakebite_scoring::{Evidence, IncidentInput};

use crate::clock::{month_from_name, to_24_hour, Meridian};

/// Checklist option that opens a free-text entry; never scored itself.
pub const OTHERS_OPTION: &str = "Others";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiteDetails {
    pub district: String,
    pub pincode: String,
    /// Clock-face hour, 1..=12.
    pub hour: u32,
    pub minute: u32,
    pub meridian: Meridian,
    /// English month name.
    pub month: String,
    pub place: String,
    /// Free-text place; overrides `place` when non-empty.
    pub custom_place: String,
    pub local_symptoms: Vec<String>,
    pub custom_local_symptoms: String,
    pub systemic_symptoms: Vec<String>,
    pub custom_systemic_symptoms: String,
    pub notes: String,
    pub has_image: bool,
}

impl Default for BiteDetails {
    fn default() -> Self {
        Self {
            district: String::new(),
            pincode: String::new(),
            hour: 12,
            minute: 0,
            meridian: Meridian::Am,
            month: "January".to_string(),
            place: String::new(),
            custom_place: String::new(),
            local_symptoms: Vec::new(),
            custom_local_symptoms: String::new(),
            systemic_symptoms: Vec::new(),
            custom_systemic_symptoms: String::new(),
            notes: String::new(),
            has_image: false,
        }
    }
}

impl BiteDetails {
    pub fn final_place(&self) -> &str {
        if self.custom_place.is_empty() {
            &self.place
        } else {
            &self.custom_place
        }
    }

    pub fn final_local_symptoms(&self) -> Vec<String> {
        resolve_checklist(&self.local_symptoms, &self.custom_local_symptoms)
    }

    pub fn final_systemic_symptoms(&self) -> Vec<String> {
        resolve_checklist(&self.systemic_symptoms, &self.custom_systemic_symptoms)
    }

    /// 24-hour hour of the bite.
    pub fn hour_24(&self) -> IntakeResult<u32> {
        if self.minute > 59 {
            return Err(IntakeError::InvalidMinute(self.minute));
        }
        to_24_hour(self.hour, self.meridian)
    }

    pub fn month_number(&self) -> IntakeResult<u32> {
        month_from_name(&self.month)
    }

    pub fn to_incident_input(&self) -> IntakeResult<IncidentInput> {
        Ok(IncidentInput {
            district: non_empty(&self.district),
            hour: self.hour_24()?,
            month: self.month_number()?,
            place: non_empty(self.final_place()),
            local_symptoms: self.final_local_symptoms(),
            systemic_symptoms: self.final_systemic_symptoms(),
            has_image: self.has_image,
        })
    }

    pub fn to_evidence(&self) -> IntakeResult<Evidence> {
        let input = self.to_incident_input()?;
        Ok(Evidence::from_input(&input)?)
    }
}

/// Drop the "Others" option and append the free-text entry, if any.
fn resolve_checklist(selected: &[String], custom: &str) -> Vec<String> {
    let mut resolved: Vec<String> = selected
        .iter()
        .filter(|s| s.as_str() != OTHERS_OPTION)
        .cloned()
        .collect();
    if !custom.is_empty() {
        resolved.push(custom.to_string());
    }
    resolved
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_place_overrides_selection() {
        let details = BiteDetails {
            place: "Foot".into(),
            custom_place: "Ankle".into(),
            ..Default::default()
        };
        assert_eq!(details.final_place(), "Ankle");
    }

    #[test]
    fn others_is_replaced_by_free_text() {
        let details = BiteDetails {
            local_symptoms: vec!["Pain".into(), "Others".into()],
            custom_local_symptoms: "Itching".into(),
            ..Default::default()
        };
        assert_eq!(details.final_local_symptoms(), vec!["Pain", "Itching"]);
    }

    #[test]
    fn others_without_free_text_is_dropped() {
        let details = BiteDetails {
            systemic_symptoms: vec!["Others".into()],
            ..Default::default()
        };
        assert!(details.final_systemic_symptoms().is_empty());
    }

    #[test]
    fn defaults_are_midnight_in_january() {
        let input = BiteDetails::default().to_incident_input().unwrap();
        assert_eq!(input.hour, 0);
        assert_eq!(input.month, 1);
        assert_eq!(input.district, None);
        assert_eq!(input.place, None);
    }

    #[test]
    fn minute_out_of_range_is_rejected() {
        let details = BiteDetails {
            minute: 60,
            ..Default::default()
        };
        assert_eq!(details.hour_24(), Err(IntakeError::InvalidMinute(60)));
    }
}
