//! Month number → season.

use snakebite_core::errors::{ScoringError, ScoringResult};
use snakebite_core::Season;

/// Map a month number (1 = January) to its season.
///
/// Dec–Feb winter, Mar–May summer, Jun–Aug monsoon, Sep–Oct autumn,
/// Nov spring. Months outside 1..=12 are rejected.
pub fn month_to_season(month: u32) -> ScoringResult<Season> {
    let season = match month {
        12 | 1 | 2 => Season::Winter,
        3..=5 => Season::Summer,
        6..=8 => Season::Monsoon,
        9 | 10 => Season::Autumn,
        11 => Season::Spring,
        _ => return Err(ScoringError::invalid_month(month)),
    };
    Ok(season)
}
