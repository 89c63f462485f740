//! # snakebite-intake
//!
//! Shapes intake form data into engine evidence, and engine output into the
//! flat incident record the store keeps. Pure data shaping; no I/O.

pub mod clock;
pub mod details;
pub mod identity;
pub mod record;
pub mod session;

pub use clock::{month_from_name, to_24_hour, Meridian};
pub use details::BiteDetails;
pub use identity::VictimIdentity;
pub use record::IncidentRecord;
pub use session::{IntakeSession, Submission};
