//! 12-hour clock and month-name conversions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use snakebite_core::errors::{IntakeError, IntakeResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Meridian {
    #[default]
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridian {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridian {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            m if m.eq_ignore_ascii_case("AM") => Ok(Self::Am),
            m if m.eq_ignore_ascii_case("PM") => Ok(Self::Pm),
            other => Err(IntakeError::UnknownMeridian(other.to_string())),
        }
    }
}

/// Convert a clock-face hour (1..=12) and meridian to a 24-hour hour.
///
/// 12 AM is 0 and 12 PM is 12.
pub fn to_24_hour(hour12: u32, meridian: Meridian) -> IntakeResult<u32> {
    if !(1..=12).contains(&hour12) {
        return Err(IntakeError::InvalidClockHour(hour12));
    }
    let offset = match meridian {
        Meridian::Am => 0,
        Meridian::Pm => 12,
    };
    Ok(hour12 % 12 + offset)
}

/// Month number (1 = January) for an English month name, ignoring case.
pub fn month_from_name(name: &str) -> IntakeResult<u32> {
    let name = name.trim();
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
        .ok_or_else(|| IntakeError::UnknownMonth(name.to_string()))
}
