//! Groq-backed open-ended answerer.
//!
//! Sends the raw question with a fixed Spanish system prompt and returns the
//! model's reply. Any failure is returned to the caller; the responder owns
//! the fallback text.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::groq};

use cambio_core::{Error as CoreError, OpenEndedAnswererTrait};

use crate::error::AiError;

/// Provider ID used in errors.
const PROVIDER_ID: &str = "groq";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

const SYSTEM_PROMPT: &str = include_str!("system_prompt.txt");

/// Configuration for the answerer.
#[derive(Clone, Debug)]
pub struct AnswererConfig {
    /// Groq API key; requests fail with `MissingApiKey` when unset.
    pub api_key: Option<String>,
    pub model: String,
    /// Temperature for generation (lower = more focused).
    pub temperature: f64,
    /// Max tokens to generate per answer.
    pub max_tokens: u64,
}

impl Default for AnswererConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            max_tokens: 250,
        }
    }
}

/// Open-ended answerer using Groq through rig-core.
pub struct GroqAnswerer {
    config: AnswererConfig,
}

impl GroqAnswerer {
    pub fn new(config: AnswererConfig) -> Self {
        Self { config }
    }

    fn api_key(&self) -> Result<String, AiError> {
        self.config
            .api_key
            .as_ref()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AiError::MissingApiKey(PROVIDER_ID.to_string()))
    }

    async fn ask(&self, question: &str) -> Result<String, AiError> {
        let key = self.api_key()?;
        let model_id = self.config.model.clone();
        let prompt = question.to_string();

        debug!("Asking {} model {}", PROVIDER_ID, model_id);

        let client: groq::Client<HttpClient> =
            groq::Client::new(&key).map_err(|e| AiError::provider(e.to_string()))?;
        let response = client
            .agent(&model_id)
            .preamble(SYSTEM_PROMPT.trim())
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens)
            .build()
            .prompt(&prompt)
            .await
            .map_err(|e| AiError::provider(e.to_string()))?;

        clean_answer(&response).ok_or(AiError::EmptyAnswer(model_id))
    }
}

#[async_trait]
impl OpenEndedAnswererTrait for GroqAnswerer {
    async fn ask_open_ended(&self, question: &str) -> cambio_core::Result<String> {
        self.ask(question).await.map_err(|e| {
            debug!("{} answer failed [{}]: {}", PROVIDER_ID, e.code(), e);
            CoreError::answerer(e.to_string())
        })
    }
}

/// Trims the reply; `None` when nothing is left.
fn clean_answer(raw: &str) -> Option<String> {
    let answer = raw.trim();
    (!answer.is_empty()).then(|| answer.to_string())
}
