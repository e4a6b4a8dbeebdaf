use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::CurrencyCode;

/// Rate metadata for a successful conversion.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FxInfo {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    /// Converted amount divided by the requested amount (zero for a zero amount).
    pub unit_rate: Decimal,
    /// Publication day of the reference rate, when the converter reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_date: Option<NaiveDate>,
}

/// What the responder hands back for one question.
///
/// `fx_info` is only present when the conversion tool was used and the
/// rate lookup succeeded.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub text: String,
    pub used_tool: bool,
    pub fx_info: Option<FxInfo>,
}

impl AnswerResult {
    pub fn converted(text: String, fx_info: FxInfo) -> Self {
        Self {
            text,
            used_tool: true,
            fx_info: Some(fx_info),
        }
    }

    pub fn conversion_failed(text: String) -> Self {
        Self {
            text,
            used_tool: true,
            fx_info: None,
        }
    }

    pub fn open_ended(text: String) -> Self {
        Self {
            text,
            used_tool: false,
            fx_info: None,
        }
    }
}
