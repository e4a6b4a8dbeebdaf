//! Exchange rate provider trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::LatestRates;

/// Trait for exchange rate providers.
///
/// Implementors only fetch latest rates; conversion is derived from them.
#[async_trait]
pub trait FxRateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the latest rates for `base`, restricted to `symbols` when not empty.
    async fn latest(&self, base: &str, symbols: &[&str]) -> Result<LatestRates, MarketDataError>;

    /// Converts `amount` of `from` into `to` using the latest rate, along
    /// with the business day that rate was published for.
    async fn convert_dated(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
    ) -> Result<(Decimal, NaiveDate), MarketDataError> {
        let latest = self.latest(from, &[to]).await?;
        let rate = latest.rate_for(to)?;
        let converted = amount
            .checked_mul(rate)
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("{} {} overflows when converted to {}", amount, from, to),
            })?;
        Ok((converted, latest.date))
    }

    /// Converts `amount` of `from` into `to` using the latest rate.
    async fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
    ) -> Result<Decimal, MarketDataError> {
        let (converted, _) = self.convert_dated(amount, from, to).await?;
        Ok(converted)
    }
}
