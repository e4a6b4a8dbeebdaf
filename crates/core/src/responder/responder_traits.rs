use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::currency::CurrencyCode;
use crate::errors::Result;

/// Converts an amount between two currencies at the current rate.
#[async_trait]
pub trait RateConverterTrait: Send + Sync {
    /// Returns `amount` of `from` expressed in `to`.
    async fn convert(&self, amount: Decimal, from: CurrencyCode, to: CurrencyCode)
        -> Result<Decimal>;

    /// Like [`convert`](Self::convert), also returning the day the rate was
    /// published when the implementation knows it.
    async fn convert_dated(
        &self,
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<(Decimal, Option<NaiveDate>)> {
        let converted = self.convert(amount, from, to).await?;
        Ok((converted, None))
    }
}

/// Answers a free-text question with plain text.
#[async_trait]
pub trait OpenEndedAnswererTrait: Send + Sync {
    async fn ask_open_ended(&self, question: &str) -> Result<String>;
}
