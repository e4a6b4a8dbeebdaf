//! Core error types for the currency question engine.
//!
//! Collaborator errors (rate provider, open-ended answerer) are folded into
//! this type so the responder can report them uniformly.

use thiserror::Error;

use cambio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid number format: {0}")]
    NumberFormat(String),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid conversion request: {0}")]
    InvalidConversionRequest(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Open-ended answerer failed: {0}")]
    Answerer(String),
}

impl Error {
    /// Create a new answerer error.
    pub fn answerer(msg: impl Into<String>) -> Self {
        Self::Answerer(msg.into())
    }
}
