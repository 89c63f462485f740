//! # snakebite-scoring
//!
//! Classifies a bite into one of four species from categorical evidence.
//! Normalizers bucket the hour and month, the symptom combiner reduces
//! symptom selections to one vector per category, and the engine weights
//! and sums every contributed vector into a percentage per species.

pub mod assessment;
pub mod engine;
pub mod evidence;
pub mod normalizers;
pub mod random;
pub mod symptoms;

pub use assessment::{Assessment, Contribution, PredictionBasis};
pub use engine::ScoringEngine;
pub use evidence::{Evidence, IncidentInput};
pub use normalizers::{hour_to_time_bucket, month_to_season};
pub use random::{SeededRandom, ThreadRandom};
pub use symptoms::combine_symptoms;
