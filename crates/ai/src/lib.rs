//! Cambio AI - open-ended answers for questions that are not conversions.
//!
//! # Architecture
//!
//! - `answerer`: Groq-backed [`OpenEndedAnswererTrait`](cambio_core::OpenEndedAnswererTrait)
//!   implementation using rig-core
//! - `error`: Answerer error types
//!
//! The system prompt (persona, language, length) lives in `system_prompt.txt`
//! and is embedded at compile time.

pub mod answerer;
pub mod error;

pub use answerer::{AnswererConfig, GroqAnswerer, DEFAULT_MODEL};
pub use error::AiError;
