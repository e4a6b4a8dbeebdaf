//! Cambio Market Data Crate
//!
//! Fetches exchange rates for the currency question engine.
//!
//! # Core Types
//!
//! - [`FxRateProvider`] - Provider trait: latest rates and conversion
//! - [`FrankfurterProvider`] - ECB reference rates via frankfurter.dev
//! - [`LatestRates`] - Rates for one base currency on one business day
//! - [`MarketDataError`] - Errors surfaced by providers

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::LatestRates;
pub use provider::frankfurter::{
    FrankfurterConfig, FrankfurterProvider, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use provider::FxRateProvider;
