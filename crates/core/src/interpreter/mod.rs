//! Question interpretation: amount, currency pair and direction.

mod amount;
mod interpreter_model;
mod interpreter_service;
mod mentions;

pub use amount::{extract_amount, normalize_amount};
pub use interpreter_model::{ConversionRequest, ParseOutcome};
pub use interpreter_service::Interpreter;
pub use mentions::{find_destination_cue, find_mentions, mentioned_currencies, CurrencyMention};
