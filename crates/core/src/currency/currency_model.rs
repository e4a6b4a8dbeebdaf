use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Supported currency codes (ISO 4217).
///
/// The catalog is closed: questions mentioning any other currency are not
/// interpreted as conversions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Aud,
    Eur,
    Gbp,
    Ars,
    Brl,
    Clp,
    Cop,
    Mxn,
    Pen,
}

impl CurrencyCode {
    /// Every supported currency, in catalog order.
    pub const ALL: [CurrencyCode; 10] = [
        CurrencyCode::Usd,
        CurrencyCode::Aud,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Ars,
        CurrencyCode::Brl,
        CurrencyCode::Clp,
        CurrencyCode::Cop,
        CurrencyCode::Mxn,
        CurrencyCode::Pen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Ars => "ARS",
            CurrencyCode::Brl => "BRL",
            CurrencyCode::Clp => "CLP",
            CurrencyCode::Cop => "COP",
            CurrencyCode::Mxn => "MXN",
            CurrencyCode::Pen => "PEN",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        CurrencyCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnsupportedCurrency(code.to_string()))
    }
}
