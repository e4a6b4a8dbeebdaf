//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching exchange rates.
///
/// Requests are attempted once; callers decide how to surface a failure.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered but did not publish a rate for the pair.
    #[error("No rate for pair {from}/{to}")]
    PairNotFound {
        /// Base currency of the request
        from: String,
        /// Requested quote currency
        to: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider returned a non-success HTTP status.
    ///
    /// Carries the request URL and response body for diagnosis.
    #[error("HTTP {status} from {provider}\nURL: {url}\nBody: {body}")]
    Http {
        provider: String,
        status: u16,
        url: String,
        body: String,
    },

    /// A provider-specific error occurred, such as an unreadable payload.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
