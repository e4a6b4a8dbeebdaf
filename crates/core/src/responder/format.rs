//! Text helpers for responder output.

use rust_decimal::{Decimal, RoundingStrategy};

/// Max characters of an error message quoted back to the user.
pub const DIAGNOSTIC_MAX_CHARS: usize = 200;

/// Formats an amount with two decimals, `,` for thousands and `.` as the
/// decimal mark (`1234.567` -> `1,234.57`).
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        grouped,
        frac_part
    )
}

/// Shortens an error message for display, on a word boundary when possible.
pub fn truncate_detail(text: &str, max_chars: usize) -> String {
    // Provider errors can span several lines (URL, params, body).
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.chars().count() <= max_chars {
        return text;
    }

    let mut end_byte = text.len();
    let mut last_space: Option<(usize, usize)> = None;
    for (chars_seen, (idx, ch)) in text.char_indices().enumerate() {
        if chars_seen == max_chars {
            end_byte = idx;
            break;
        }
        if ch.is_whitespace() {
            last_space = Some((idx, chars_seen));
        }
    }

    let truncated = &text[..end_byte];
    let detail = match last_space {
        Some((byte_idx, char_idx)) if char_idx > max_chars / 2 => &truncated[..byte_idx],
        _ => truncated,
    };

    format!("{}...", detail.trim())
}
