use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::MarketDataError;

/// Latest reference rates for one base currency.
///
/// `rates` maps quote currency to units of that currency per `amount`
/// units of `base`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatestRates {
    pub amount: f64,
    pub base: String,
    /// Business day the rates were published for
    pub date: NaiveDate,
    pub rates: HashMap<String, f64>,
}

impl LatestRates {
    /// Rate for one unit of `base` in `symbol`.
    pub fn rate_for(&self, symbol: &str) -> Result<Decimal, MarketDataError> {
        let symbol = symbol.to_uppercase();
        let rate = self
            .rates
            .get(&symbol)
            .copied()
            .ok_or_else(|| MarketDataError::PairNotFound {
                from: self.base.clone(),
                to: symbol.clone(),
            })?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(MarketDataError::ValidationFailed {
                message: format!("Invalid rate {} for {}/{}", rate, self.base, symbol),
            });
        }

        let per_unit = if self.amount > 0.0 && self.amount != 1.0 {
            rate / self.amount
        } else {
            rate
        };

        Decimal::try_from(per_unit).map_err(|_| MarketDataError::ValidationFailed {
            message: "Failed to convert rate to decimal".to_string(),
        })
    }
}
