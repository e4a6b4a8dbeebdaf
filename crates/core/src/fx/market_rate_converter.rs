use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use cambio_market_data::FxRateProvider;

use crate::currency::CurrencyCode;
use crate::errors::Result;
use crate::responder::RateConverterTrait;

/// Exposes a market data provider as the responder's rate converter.
pub struct MarketRateConverter {
    provider: Arc<dyn FxRateProvider>,
}

impl MarketRateConverter {
    pub fn new(provider: Arc<dyn FxRateProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RateConverterTrait for MarketRateConverter {
    async fn convert(
        &self,
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Decimal> {
        let (converted, _) = self.convert_dated(amount, from, to).await?;
        Ok(converted)
    }

    async fn convert_dated(
        &self,
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<(Decimal, Option<NaiveDate>)> {
        debug!("Requesting {}→{} from {}", from, to, self.provider.id());
        let (converted, date) = self
            .provider
            .convert_dated(amount, from.as_str(), to.as_str())
            .await?;
        Ok((converted, Some(date)))
    }
}
