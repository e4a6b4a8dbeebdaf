//! Amount extraction and separator normalization.
//!
//! Spanish questions mix US style (`10,000.50`) and European style
//! (`10.000,50`) separators. The rule applied to a numeric run is:
//!
//! - only `,` present: every `,` is a thousands separator (`10,000` -> 10000)
//! - a single `.`: decimal point (`2.50` -> 2.50)
//! - several `.`: thousands separators (`1.000.000` -> 1000000)
//! - both present: whichever occurs last is the decimal mark and the other
//!   is dropped (`1.234,56` -> 1234.56, `1,234.56` -> 1234.56)

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::{Error, Result};

lazy_static! {
    /// A numeric run starts and ends on a digit, so trailing sentence
    /// punctuation is never captured.
    static ref AMOUNT_REGEX: Regex =
        Regex::new(r"\d+(?:[.,]\d+)*").expect("Invalid regex pattern");
}

/// Normalizes a numeric run into a decimal amount.
pub fn normalize_amount(raw: &str) -> Result<Decimal> {
    let raw = raw.trim();
    let has_comma = raw.contains(',');
    let has_dot = raw.contains('.');

    let normalized = match (has_comma, has_dot) {
        (true, false) => raw.replace(',', ""),
        (false, true) if raw.matches('.').count() > 1 => raw.replace('.', ""),
        (false, _) => raw.to_string(),
        (true, true) => {
            let (decimal, thousands) = if raw.rfind(',') > raw.rfind('.') {
                (',', '.')
            } else {
                ('.', ',')
            };
            let stripped = raw.replace(thousands, "");
            if stripped.matches(decimal).count() > 1 {
                return Err(Error::NumberFormat(format!(
                    "'{}' has more than one decimal mark",
                    raw
                )));
            }
            stripped.replace(decimal, ".")
        }
    };

    Decimal::from_str(&normalized).map_err(|e| Error::NumberFormat(format!("'{}': {}", raw, e)))
}

/// Finds the first numeric run in `text` and normalizes it.
///
/// A run that fails to normalize, including one too large for `Decimal`,
/// counts as no amount at all.
pub fn extract_amount(text: &str) -> Option<Decimal> {
    let raw = AMOUNT_REGEX.find(text)?.as_str();
    match normalize_amount(raw) {
        Ok(amount) => Some(amount),
        Err(e) => {
            warn!("Discarding amount, falling back to one unit: {}", e);
            None
        }
    }
}
