//! Answerer error types.

use thiserror::Error;

/// Open-ended answerer errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// No Groq key configured.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model replied with nothing but whitespace.
    #[error("Empty answer from model {0}")]
    EmptyAnswer(String),
}

impl AiError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::EmptyAnswer(_) => "EMPTY_ANSWER",
        }
    }
}
