//! # snakebite-core
//!
//! Foundation crate for the snakebite scoring engine.
//! Defines the domain types, errors, config, reference tables, tracing, and
//! constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ReferenceTables, ScoringConfig, SnakebiteConfig};
pub use errors::{SnakebiteError, SnakebiteErrorCode, SnakebiteResult};
pub use traits::RandomSource;
pub use types::collections::FxHashMap;
pub use types::evidence::{Category, EvidenceVector};
pub use types::species::{Prediction, SpeciesLabel};
pub use types::temporal::{Season, TimeBucket};
