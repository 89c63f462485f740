//! Engine inputs.

use serde::{Deserialize, Serialize};

use snakebite_core::errors::ScoringResult;
use snakebite_core::{Season, TimeBucket};

use crate::normalizers::{hour_to_time_bucket, month_to_season};

/// Raw incident fields at the engine boundary.
///
/// `hour` is on the 24-hour clock; converting from 12-hour + AM/PM is the
/// caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentInput {
    pub district: Option<String>,
    pub hour: u32,
    pub month: u32,
    pub place: Option<String>,
    pub local_symptoms: Vec<String>,
    pub systemic_symptoms: Vec<String>,
    pub has_image: bool,
}

/// Normalized evidence for one classification.
///
/// Every field is optional; absent fields contribute nothing. An empty
/// string or empty list counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evidence {
    pub district: Option<String>,
    pub time: Option<TimeBucket>,
    pub season: Option<Season>,
    pub place: Option<String>,
    pub local_symptoms: Vec<String>,
    pub systemic_symptoms: Vec<String>,
    /// A photo was attached. Only consulted when no evidence was supplied.
    pub has_image: bool,
}

impl Evidence {
    /// Validate and normalize boundary input.
    pub fn from_input(input: &IncidentInput) -> ScoringResult<Self> {
        Ok(Self {
            district: input.district.clone(),
            time: Some(hour_to_time_bucket(input.hour)?),
            season: Some(month_to_season(input.month)?),
            place: input.place.clone(),
            local_symptoms: input.local_symptoms.clone(),
            systemic_symptoms: input.systemic_symptoms.clone(),
            has_image: input.has_image,
        })
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_time(mut self, time: TimeBucket) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_local_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_systemic_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.systemic_symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    /// District, if present and non-empty.
    pub fn district(&self) -> Option<&str> {
        non_empty(self.district.as_deref())
    }

    /// Bite place, if present and non-empty.
    pub fn place(&self) -> Option<&str> {
        non_empty(self.place.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
