use log::debug;
use rust_decimal::Decimal;

use super::amount::extract_amount;
use super::interpreter_model::{ConversionRequest, ParseOutcome};
use super::mentions::{find_destination_cue, mentioned_currencies};
use crate::currency::CurrencyCode;

/// Turns a Spanish question into a conversion request.
///
/// Precedence when picking the pair:
/// 1. an explicit "en/a <currency>" cue fixes the destination, the source is
///    the first other currency mentioned
/// 2. otherwise the first two distinct currencies, in order of appearance
///
/// A missing amount defaults to one unit; a missing pair is never recovered.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, question: &str) -> ParseOutcome {
        let text = question.to_lowercase();
        let currencies = mentioned_currencies(&text);

        let pair = pair_from_destination_cue(&text, &currencies)
            .or_else(|| pair_from_order(&currencies));
        let Some((from, to)) = pair else {
            debug!(
                "Not a conversion: {} distinct currencies mentioned",
                currencies.len()
            );
            return ParseOutcome::NotConversion;
        };

        let amount = extract_amount(&text).unwrap_or(Decimal::ONE);
        match ConversionRequest::new(amount, from, to) {
            Ok(request) => {
                debug!("Parsed conversion {} {} -> {}", amount, from, to);
                ParseOutcome::Conversion(request)
            }
            Err(e) => {
                debug!("Not a conversion: {}", e);
                ParseOutcome::NotConversion
            }
        }
    }
}

fn pair_from_destination_cue(
    text: &str,
    currencies: &[CurrencyCode],
) -> Option<(CurrencyCode, CurrencyCode)> {
    let to = find_destination_cue(text)?;
    let from = currencies.iter().copied().find(|c| *c != to)?;
    Some((from, to))
}

fn pair_from_order(currencies: &[CurrencyCode]) -> Option<(CurrencyCode, CurrencyCode)> {
    match currencies {
        [from, to, ..] => Some((*from, *to)),
        _ => None,
    }
}
