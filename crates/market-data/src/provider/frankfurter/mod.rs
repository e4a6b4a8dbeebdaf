//! Frankfurter provider for ECB reference exchange rates.
//!
//! The API needs no key. Rates are published once per business day, so
//! "latest" means the last published day, not a live quote.
//!
//! See <https://frankfurter.dev/>.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::LatestRates;
use crate::provider::FxRateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "FRANKFURTER";

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.dev/v1";

/// Mirror tried once when the default host answers 404.
const ALTERNATE_BASE_URL: &str = "https://api.frankfurter.app/v1";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Connection settings for [`FrankfurterProvider`].
#[derive(Clone, Debug)]
pub struct FrankfurterConfig {
    pub base_url: String,
    /// Host tried once when `base_url` answers 404; `None` disables it.
    pub alternate_base_url: Option<String>,
    pub timeout: Duration,
}

impl FrankfurterConfig {
    /// Settings for `base_url`. The mirror fallback is only kept for the
    /// public `frankfurter.dev` host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let alternate_base_url = base_url
            .contains("frankfurter.dev")
            .then(|| ALTERNATE_BASE_URL.to_string());
        Self {
            base_url,
            alternate_base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for FrankfurterConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

/// Frankfurter (ECB) exchange rate provider.
///
/// # Example
///
/// ```ignore
/// use cambio_market_data::{FrankfurterConfig, FrankfurterProvider, FxRateProvider};
///
/// let provider = FrankfurterProvider::new(FrankfurterConfig::default());
/// let usd = provider.convert(dec!(500), "EUR", "USD").await?;
/// ```
pub struct FrankfurterProvider {
    client: Client,
    base_url: String,
    alternate_base_url: Option<String>,
}

impl FrankfurterProvider {
    pub fn new(config: FrankfurterConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: clean_url(&config.base_url),
            alternate_base_url: config.alternate_base_url.as_deref().map(clean_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn alternate_base_url(&self) -> Option<&str> {
        self.alternate_base_url.as_deref()
    }

    async fn send(&self, url: &str, params: &[(&str, String)]) -> Result<Response, MarketDataError> {
        debug!("GET {} {:?}", url, params);
        self.client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::Network(e)
                }
            })
    }

    async fn parse_latest(
        response: Response,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<LatestRates, MarketDataError> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Http {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
                url: format!("{}?{}", url, encode_params(params)),
                body,
            });
        }

        response
            .json::<LatestRates>()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl FxRateProvider for FrankfurterProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest(&self, base: &str, symbols: &[&str]) -> Result<LatestRates, MarketDataError> {
        let params = latest_params(base, symbols);
        let url = latest_url(&self.base_url);
        let response = self.send(&url, &params).await?;

        let alternate = self
            .alternate_base_url()
            .filter(|_| response.status() == StatusCode::NOT_FOUND);
        if let Some(alternate) = alternate {
            let alternate_url = latest_url(alternate);
            warn!("{} returned 404, retrying on {}", url, alternate_url);
            let response = self.send(&alternate_url, &params).await?;
            return Self::parse_latest(response, &alternate_url, &params).await;
        }

        Self::parse_latest(response, &url, &params).await
    }
}

/// Removes whitespace and line breaks that sneak into URLs from env files.
pub fn clean_url(url: &str) -> String {
    url.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim()
        .trim_end_matches('/')
        .to_string()
}

fn latest_url(base_url: &str) -> String {
    clean_url(&format!("{}/latest", clean_url(base_url)))
}

fn latest_params(base: &str, symbols: &[&str]) -> Vec<(&'static str, String)> {
    let mut params = vec![("base", base.to_uppercase())];
    if !symbols.is_empty() {
        let symbols = symbols
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join(",");
        params.push(("symbols", symbols));
    }
    params
}

fn encode_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
