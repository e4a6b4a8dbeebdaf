use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::format::{format_amount, truncate_detail, DIAGNOSTIC_MAX_CHARS};
use super::responder_model::{AnswerResult, FxInfo};
use super::responder_traits::{OpenEndedAnswererTrait, RateConverterTrait};
use crate::interpreter::{ConversionRequest, Interpreter, ParseOutcome};

/// Canned explanation used when the open-ended answerer is unavailable.
pub const FALLBACK_EXPLANATION: &str = "La tasa de cambio es el precio de una moneda expresado \
en otra: indica cuántas unidades de una divisa se necesitan para obtener una unidad de otra. \
Es importante en las transacciones internacionales porque determina el costo real de importar, \
exportar, invertir o financiar proyectos en el exterior, y sus variaciones generan riesgo \
cambiario sobre ingresos y deudas denominados en moneda extranjera.";

/// Answers a question either with a conversion or with free text.
///
/// Every path ends in an [`AnswerResult`]; collaborator failures are
/// reported in the text, never returned as errors.
pub struct Responder {
    interpreter: Interpreter,
    rate_converter: Arc<dyn RateConverterTrait>,
    answerer: Arc<dyn OpenEndedAnswererTrait>,
}

impl Responder {
    pub fn new(
        rate_converter: Arc<dyn RateConverterTrait>,
        answerer: Arc<dyn OpenEndedAnswererTrait>,
    ) -> Self {
        Self {
            interpreter: Interpreter::new(),
            rate_converter,
            answerer,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub async fn answer(&self, question: &str) -> AnswerResult {
        match self.interpreter.parse(question) {
            ParseOutcome::Conversion(request) => self.answer_conversion(&request).await,
            ParseOutcome::NotConversion => self.answer_open_ended(question).await,
        }
    }

    async fn answer_conversion(&self, request: &ConversionRequest) -> AnswerResult {
        let (amount, from, to) = (request.amount(), request.from(), request.to());
        info!("Converting {} {} to {}", amount, from, to);

        match self.rate_converter.convert_dated(amount, from, to).await {
            Ok((converted, rate_date)) => {
                let unit_rate = unit_rate(amount, converted);
                debug!("Unit rate {} -> {}: {}", from, to, unit_rate);
                let text = format!(
                    "{} {} ≈ {} {}",
                    format_amount(amount),
                    from,
                    format_amount(converted),
                    to
                );
                AnswerResult::converted(
                    text,
                    FxInfo {
                        from,
                        to,
                        unit_rate,
                        rate_date,
                    },
                )
            }
            Err(e) => {
                warn!("Rate conversion {}→{} failed: {}", from, to, e);
                let text = format!(
                    "No pude obtener la tasa de cambio para {}→{}. Detalle: {}",
                    from,
                    to,
                    truncate_detail(&e.to_string(), DIAGNOSTIC_MAX_CHARS)
                );
                AnswerResult::conversion_failed(text)
            }
        }
    }

    async fn answer_open_ended(&self, question: &str) -> AnswerResult {
        debug!("Delegating question to the open-ended answerer");

        match self.answerer.ask_open_ended(question).await {
            Ok(text) => AnswerResult::open_ended(text),
            Err(e) => {
                warn!("Open-ended answerer failed, using canned explanation: {}", e);
                let text = format!(
                    "{}\n\n(Nota técnica: no se pudo consultar el servicio de respuestas: {})",
                    FALLBACK_EXPLANATION,
                    truncate_detail(&e.to_string(), DIAGNOSTIC_MAX_CHARS)
                );
                AnswerResult::open_ended(text)
            }
        }
    }
}

/// `converted / amount`, or zero when nothing was converted.
fn unit_rate(amount: Decimal, converted: Decimal) -> Decimal {
    if amount.is_zero() {
        return Decimal::ZERO;
    }
    converted.checked_div(amount).unwrap_or(Decimal::ZERO)
}
