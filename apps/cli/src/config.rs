use std::time::Duration;

use cambio_ai::DEFAULT_MODEL;
use cambio_market_data::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub struct Config {
    pub fx_base_url: String,
    pub fx_timeout: Duration,
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fx_base_url = lookup("FX_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let fx_timeout = lookup("FX_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        let groq_api_key = lookup("GROQ_API_KEY").filter(|k| !k.trim().is_empty());
        let groq_model = lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let log_format = lookup("CAMBIO_LOG_FORMAT").unwrap_or_else(|| "text".to_string());
        Self {
            fx_base_url,
            fx_timeout,
            groq_api_key,
            groq_model,
            log_format,
        }
    }
}
