//! Canonical time-of-day and season buckets.
//!
//! The string forms are the reference-table keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Time-of-day bucket for the hour of the bite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    #[serde(rename = "Early Morning")]
    EarlyMorning,
    #[serde(rename = "During the day")]
    Day,
    #[serde(rename = "Evening")]
    Evening,
    #[serde(rename = "Night")]
    Night,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 4] = [Self::EarlyMorning, Self::Day, Self::Evening, Self::Night];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EarlyMorning => "Early Morning",
            Self::Day => "During the day",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Season of the month of the bite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
    Autumn,
    Spring,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Self::Winter,
        Self::Summer,
        Self::Monsoon,
        Self::Autumn,
        Self::Spring,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Summer => "Summer",
            Self::Monsoon => "Monsoon",
            Self::Autumn => "Autumn",
            Self::Spring => "Spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
