use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::CurrencyCode;
use crate::errors::{Error, Result};

/// A validated conversion: `amount` of `from` expressed in `to`.
///
/// Only the interpreter builds these, which keeps `from != to` and a
/// non-negative amount as invariants.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    amount: Decimal,
    from: CurrencyCode,
    to: CurrencyCode,
}

impl ConversionRequest {
    pub(crate) fn new(amount: Decimal, from: CurrencyCode, to: CurrencyCode) -> Result<Self> {
        if from == to {
            return Err(Error::InvalidConversionRequest(format!(
                "source and destination are both {}",
                from
            )));
        }
        if amount.is_sign_negative() {
            return Err(Error::InvalidConversionRequest(format!(
                "negative amount {}",
                amount
            )));
        }
        Ok(Self { amount, from, to })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn from(&self) -> CurrencyCode {
        self.from
    }

    pub fn to(&self) -> CurrencyCode {
        self.to
    }
}

/// Result of interpreting a question.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParseOutcome {
    Conversion(ConversionRequest),
    NotConversion,
}

impl ParseOutcome {
    pub fn is_conversion(&self) -> bool {
        matches!(self, ParseOutcome::Conversion(_))
    }

    pub fn conversion(&self) -> Option<&ConversionRequest> {
        match self {
            ParseOutcome::Conversion(request) => Some(request),
            ParseOutcome::NotConversion => None,
        }
    }
}
