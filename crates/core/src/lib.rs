//! Cambio Core - interprets Spanish currency questions and answers them.
//!
//! This crate contains the question engine: the [`Interpreter`] extracts an
//! amount and a currency pair from free text, and the [`Responder`] turns
//! the result into an answer through two collaborators it only knows by
//! trait (a rate converter and an open-ended answerer).

pub mod currency;
pub mod errors;
pub mod fx;
pub mod interpreter;
pub mod responder;

pub use currency::CurrencyCode;
pub use interpreter::{ConversionRequest, Interpreter, ParseOutcome};
pub use responder::{AnswerResult, FxInfo, OpenEndedAnswererTrait, RateConverterTrait, Responder};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
