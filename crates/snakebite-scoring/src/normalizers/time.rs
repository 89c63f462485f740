//! Hour of day → time bucket.

use snakebite_core::errors::{ScoringError, ScoringResult};
use snakebite_core::TimeBucket;

/// Map a 24-hour clock hour to its time bucket.
///
/// Half-open ranges, first match wins: [4,9) early morning, [9,16) day,
/// [16,20) evening, everything else night. Hours above 23 are rejected.
pub fn hour_to_time_bucket(hour: u32) -> ScoringResult<TimeBucket> {
    if hour > 23 {
        return Err(ScoringError::invalid_hour(hour));
    }
    let bucket = if (4..9).contains(&hour) {
        TimeBucket::EarlyMorning
    } else if (9..16).contains(&hour) {
        TimeBucket::Day
    } else if (16..20).contains(&hour) {
        TimeBucket::Evening
    } else {
        TimeBucket::Night
    };
    Ok(bucket)
}
