//! Responder - turns an interpreted question into the final answer.

mod format;
mod responder_model;
mod responder_service;
mod responder_traits;

pub use format::{format_amount, truncate_detail, DIAGNOSTIC_MAX_CHARS};
pub use responder_model::{AnswerResult, FxInfo};
pub use responder_service::{Responder, FALLBACK_EXPLANATION};
pub use responder_traits::{OpenEndedAnswererTrait, RateConverterTrait};
