//! Fixed constants shared across the workspace.

/// Number of species dimensions in every evidence vector.
pub const SPECIES_COUNT: usize = 4;

/// Per-category weights, applied by position in the contributed list.
pub const DEFAULT_CATEGORY_WEIGHTS: [f64; 6] = [0.8, 0.4, 0.4, 0.5, 0.6, 0.8];

/// Weight used for any contributed position past the end of the weight list.
pub const DEFAULT_OVERFLOW_WEIGHT: f64 = 1.0;

/// Symptom selection that suppresses every other symptom in its category.
pub const NO_SYMPTOMS: &str = "No Symptoms";

/// Output label when nothing was supplied and no image was attached.
pub const INSUFFICIENT_INPUT: &str = "Insufficient Input";

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "SNAKEBITE_LOG";

/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";
