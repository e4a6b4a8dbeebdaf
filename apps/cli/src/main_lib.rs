use std::sync::Arc;

use cambio_ai::{AnswererConfig, GroqAnswerer};
use cambio_core::fx::MarketRateConverter;
use cambio_core::{AnswerResult, ParseOutcome, Responder};
use cambio_market_data::{FrankfurterConfig, FrankfurterProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Sample questions answered by `--demo`.
pub const DEMO_QUESTIONS: [&str; 7] = [
    "¿Cuál es el valor de 10,000 COP en USD hoy?",
    "¿Cuánto equivalen 500 EUR en COP con la tasa actual?",
    "Convierte 1,000 pesos argentinos en soles peruanos",
    "Convierte 250 dólares australianos a euros",
    "Convierte 750 libras esterlinas a pesos mexicanos",
    "¿Cuánto equivalen 1200 reales brasileños en pesos chilenos?",
    "¿Qué significa tasa de cambio y por qué es importante en transacciones internacionales?",
];

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so answers on stdout stay pipeable.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_responder(config: &Config) -> Responder {
    let provider = Arc::new(FrankfurterProvider::new(FrankfurterConfig {
        timeout: config.fx_timeout,
        ..FrankfurterConfig::with_base_url(config.fx_base_url.as_str())
    }));
    let rate_converter = Arc::new(MarketRateConverter::new(provider));

    if config.groq_api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; conceptual questions get the built-in explanation");
    }
    let answerer = Arc::new(GroqAnswerer::new(AnswererConfig {
        api_key: config.groq_api_key.clone(),
        model: config.groq_model.clone(),
        ..AnswererConfig::default()
    }));

    Responder::new(rate_converter, answerer)
}

pub fn render_answer(question: &str, result: &AnswerResult, json: bool) -> anyhow::Result<String> {
    if json {
        let value = serde_json::json!({ "question": question, "answer": result });
        return Ok(serde_json::to_string(&value)?);
    }
    let date_note = result
        .fx_info
        .as_ref()
        .and_then(|info| info.rate_date)
        .map(|date| format!("(Tasa de referencia publicada el {})\n", date))
        .unwrap_or_default();
    Ok(format!("Q: {}\n{}\n{}", question, result.text, date_note))
}

pub fn render_outcome(question: &str, outcome: &ParseOutcome, json: bool) -> anyhow::Result<String> {
    if json {
        let value = serde_json::json!({ "question": question, "outcome": outcome });
        return Ok(serde_json::to_string(&value)?);
    }
    let line = match outcome {
        ParseOutcome::Conversion(request) => format!(
            "conversión: {} {} -> {}",
            request.amount(),
            request.from(),
            request.to()
        ),
        ParseOutcome::NotConversion => "no es una conversión".to_string(),
    };
    Ok(format!("Q: {}\n{}\n", question, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cambio_core::{CurrencyCode, FxInfo, Interpreter};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_demo_questions_cover_both_paths() {
        let interpreter = Interpreter::new();
        let conversions = DEMO_QUESTIONS
            .iter()
            .filter(|q| interpreter.parse(q).is_conversion())
            .count();
        assert_eq!(conversions, 6);
    }

    #[test]
    fn test_render_outcome_text() {
        let outcome = Interpreter::new().parse(DEMO_QUESTIONS[0]);
        let text = render_outcome(DEMO_QUESTIONS[0], &outcome, false).unwrap();
        assert!(text.ends_with("conversión: 10000 COP -> USD\n"));
    }

    #[test]
    fn test_render_answer_text_mentions_rate_date() {
        let result = AnswerResult::converted(
            "1.00 EUR ≈ 1.08 USD".to_string(),
            FxInfo {
                from: CurrencyCode::Eur,
                to: CurrencyCode::Usd,
                unit_rate: dec!(1.08),
                rate_date: NaiveDate::from_ymd_opt(2024, 5, 10),
            },
        );
        let text = render_answer("euro a dólar", &result, false).unwrap();
        assert_eq!(
            text,
            "Q: euro a dólar\n1.00 EUR ≈ 1.08 USD\n(Tasa de referencia publicada el 2024-05-10)\n"
        );
    }

    #[test]
    fn test_render_answer_text_without_date() {
        let result = AnswerResult::open_ended("texto".to_string());
        assert_eq!(render_answer("¿Qué?", &result, false).unwrap(), "Q: ¿Qué?\ntexto\n");
    }

    #[test]
    fn test_render_answer_json() {
        let result = AnswerResult::open_ended("texto".to_string());
        let line = render_answer("¿Qué?", &result, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["question"], "¿Qué?");
        assert_eq!(value["answer"]["text"], "texto");
        assert_eq!(value["answer"]["usedTool"], false);
        assert!(value["answer"]["fxInfo"].is_null());
    }
}
