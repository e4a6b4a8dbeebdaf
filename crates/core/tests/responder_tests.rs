//! Integration tests for the responder state machine.
//!
//! Collaborators are replaced with in-test fakes that count calls, so each
//! test can check which path was taken and that only one outbound call
//! happened.

use async_trait::async_trait;
use cambio_core::responder::FALLBACK_EXPLANATION;
use cambio_core::{
    CurrencyCode, Error, OpenEndedAnswererTrait, RateConverterTrait, Responder, Result,
};
use cambio_market_data::MarketDataError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// =============================================================================
// Fakes
// =============================================================================

/// Converts at a fixed rate, or fails with a pair error when `rate` is None.
struct FakeRateConverter {
    rate: Option<Decimal>,
    calls: AtomicUsize,
}

impl FakeRateConverter {
    fn with_rate(rate: Decimal) -> Arc<Self> {
        Arc::new(Self {
            rate: Some(rate),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            rate: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateConverterTrait for FakeRateConverter {
    async fn convert(
        &self,
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Decimal> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.rate {
            Some(rate) => Ok(amount * rate),
            None => Err(Error::MarketData(MarketDataError::PairNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })),
        }
    }
}

/// Replies with fixed text, or fails like a service without credentials.
struct FakeAnswerer {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl FakeAnswerer {
    fn with_reply(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OpenEndedAnswererTrait for FakeAnswerer {
    async fn ask_open_ended(&self, _question: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| Error::answerer("Missing API key for provider groq"))
    }
}

const CONCEPT_QUESTION: &str =
    "¿Qué significa tasa de cambio y por qué es importante en transacciones internacionales?";

// =============================================================================
// Conversion path
// =============================================================================

#[tokio::test]
async fn test_conversion_success() {
    let converter = FakeRateConverter::with_rate(dec!(0.00025));
    let answerer = FakeAnswerer::with_reply("unused");
    let responder = Responder::new(converter.clone(), answerer.clone());

    let result = responder
        .answer("¿Cuál es el valor de 10,000 COP en USD hoy?")
        .await;

    assert_eq!(result.text, "10,000.00 COP ≈ 2.50 USD");
    assert!(result.used_tool);
    let fx_info = result.fx_info.expect("fx info");
    assert_eq!(fx_info.from, CurrencyCode::Cop);
    assert_eq!(fx_info.to, CurrencyCode::Usd);
    assert_eq!(fx_info.unit_rate, dec!(0.00025));
    assert_eq!(converter.calls(), 1);
    assert_eq!(answerer.calls(), 0);
}

#[tokio::test]
async fn test_conversion_with_aliases() {
    let converter = FakeRateConverter::with_rate(dec!(1.2));
    let responder = Responder::new(converter, FakeAnswerer::with_reply("unused"));

    let result = responder
        .answer("Convierte 1,000 pesos argentinos en soles peruanos")
        .await;

    assert_eq!(result.text, "1,000.00 ARS ≈ 1,200.00 PEN");
    assert_eq!(result.fx_info.map(|i| i.unit_rate), Some(dec!(1.2)));
}

#[tokio::test]
async fn test_implicit_unit_conversion() {
    let responder = Responder::new(
        FakeRateConverter::with_rate(dec!(1.08)),
        FakeAnswerer::with_reply("unused"),
    );

    let result = responder.answer("¿Cómo está el euro frente al dólar?").await;

    assert_eq!(result.text, "1.00 EUR ≈ 1.08 USD");
    assert!(result.used_tool);
}

#[tokio::test]
async fn test_zero_amount_has_zero_unit_rate() {
    let responder = Responder::new(
        FakeRateConverter::with_rate(dec!(1.08)),
        FakeAnswerer::with_reply("unused"),
    );

    let result = responder.answer("Convierte 0 EUR a USD").await;

    assert_eq!(result.text, "0.00 EUR ≈ 0.00 USD");
    assert_eq!(result.fx_info.map(|i| i.unit_rate), Some(Decimal::ZERO));
}

#[tokio::test]
async fn test_rate_date_reaches_fx_info() {
    struct DatedConverter;

    #[async_trait]
    impl RateConverterTrait for DatedConverter {
        async fn convert(&self, amount: Decimal, _: CurrencyCode, _: CurrencyCode) -> Result<Decimal> {
            Ok(amount * dec!(1.08))
        }

        async fn convert_dated(
            &self,
            amount: Decimal,
            from: CurrencyCode,
            to: CurrencyCode,
        ) -> Result<(Decimal, Option<NaiveDate>)> {
            let converted = self.convert(amount, from, to).await?;
            Ok((converted, NaiveDate::from_ymd_opt(2024, 5, 10)))
        }
    }

    let responder = Responder::new(Arc::new(DatedConverter), FakeAnswerer::with_reply("unused"));
    let result = responder.answer("Convierte 100 EUR a USD").await;

    assert_eq!(result.text, "100.00 EUR ≈ 108.00 USD");
    let fx_info = result.fx_info.expect("fx info");
    assert_eq!(fx_info.rate_date, NaiveDate::from_ymd_opt(2024, 5, 10));
    let json = serde_json::to_value(&fx_info).unwrap();
    assert_eq!(json["rateDate"], "2024-05-10");
}

#[tokio::test]
async fn test_provider_failure_is_reported() {
    let converter = FakeRateConverter::failing();
    let answerer = FakeAnswerer::with_reply("unused");
    let responder = Responder::new(converter.clone(), answerer.clone());

    let result = responder.answer("Convierte 500 EUR a COP").await;

    assert!(result.used_tool);
    assert!(result.fx_info.is_none());
    assert!(result.text.contains("EUR→COP"));
    assert!(result.text.contains("No rate for pair EUR/COP"));
    assert_eq!(converter.calls(), 1);
    assert_eq!(answerer.calls(), 0);
}

#[tokio::test]
async fn test_long_provider_errors_are_truncated() {
    struct VerboseFailure;

    #[async_trait]
    impl RateConverterTrait for VerboseFailure {
        async fn convert(&self, _: Decimal, _: CurrencyCode, _: CurrencyCode) -> Result<Decimal> {
            Err(Error::MarketData(MarketDataError::ProviderError {
                provider: "FRANKFURTER".to_string(),
                message: "upstream said no ".repeat(100),
            }))
        }
    }

    let responder = Responder::new(Arc::new(VerboseFailure), FakeAnswerer::with_reply("unused"));
    let result = responder.answer("5 USD en MXN").await;

    assert!(result.text.ends_with("..."));
    assert!(result.text.chars().count() < 300);
}

// =============================================================================
// Open-ended path
// =============================================================================

#[tokio::test]
async fn test_open_ended_answer_is_verbatim() {
    let converter = FakeRateConverter::with_rate(dec!(1));
    let answerer = FakeAnswerer::with_reply("  Una tasa de cambio es un precio.  ");
    let responder = Responder::new(converter.clone(), answerer.clone());

    let result = responder.answer(CONCEPT_QUESTION).await;

    assert_eq!(result.text, "  Una tasa de cambio es un precio.  ");
    assert!(!result.used_tool);
    assert!(result.fx_info.is_none());
    assert_eq!(converter.calls(), 0);
    assert_eq!(answerer.calls(), 1);
}

#[tokio::test]
async fn test_answerer_failure_uses_canned_explanation() {
    let answerer = FakeAnswerer::failing();
    let responder = Responder::new(FakeRateConverter::with_rate(dec!(1)), answerer.clone());

    let result = responder.answer(CONCEPT_QUESTION).await;

    assert!(result.text.starts_with(FALLBACK_EXPLANATION));
    assert!(result.text.contains("Nota técnica"));
    assert!(result.text.contains("Missing API key"));
    assert!(!result.used_tool);
    assert!(result.fx_info.is_none());
    assert_eq!(answerer.calls(), 1);
}

#[tokio::test]
async fn test_single_currency_goes_to_answerer() {
    let converter = FakeRateConverter::with_rate(dec!(1));
    let answerer = FakeAnswerer::with_reply("El euro es la moneda de la eurozona.");
    let responder = Responder::new(converter.clone(), answerer.clone());

    let result = responder.answer("¿Qué es el EUR?").await;

    assert!(!result.used_tool);
    assert_eq!(converter.calls(), 0);
    assert_eq!(answerer.calls(), 1);
}

// =============================================================================
// Shared use
// =============================================================================

#[tokio::test]
async fn test_responder_is_shareable_across_tasks() {
    let converter = FakeRateConverter::with_rate(dec!(2));
    let responder = Arc::new(Responder::new(
        converter.clone(),
        FakeAnswerer::with_reply("ok"),
    ));

    let handles: Vec<_> = (1..=8)
        .map(|i| {
            let responder = responder.clone();
            tokio::spawn(async move { responder.answer(&format!("{} USD a EUR", i)).await })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap();
        let expected = format!("{}.00 USD ≈ {}.00 EUR", i + 1, (i + 1) * 2);
        assert_eq!(result.text, expected);
    }
    assert_eq!(converter.calls(), 8);
}

#[tokio::test]
async fn test_answer_result_serializes_camel_case() {
    let responder = Responder::new(
        FakeRateConverter::with_rate(dec!(4000)),
        FakeAnswerer::with_reply("unused"),
    );

    let result = responder.answer("10 USD en COP").await;
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["usedTool"], true);
    assert_eq!(json["fxInfo"]["from"], "USD");
    assert_eq!(json["fxInfo"]["to"], "COP");
    assert!(json["fxInfo"].get("unitRate").is_some());
    assert!(json["fxInfo"].get("rateDate").is_none());
}
