//! Raw hour/month → canonical table keys.

pub mod season;
pub mod time;

pub use season::month_to_season;
pub use time::hour_to_time_bucket;
