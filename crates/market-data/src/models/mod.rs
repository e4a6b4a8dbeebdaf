//! Market data models.

mod latest_rates;

pub use latest_rates::LatestRates;
