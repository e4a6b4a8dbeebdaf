//! Currency mention extraction from lowercased question text.

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use crate::currency::{aliases_longest_first, resolve_alias, CurrencyCode};

lazy_static! {
    /// Exact ISO codes on word boundaries: `\b(usd|aud|...)\b`.
    static ref ISO_CODE_REGEX: Regex =
        Regex::new(&format!(r"\b({})\b", iso_alternation())).expect("Invalid regex pattern");

    /// Spanish aliases, longest first so leftmost-first matching picks the
    /// most specific phrase ("pesos argentinos" before "pesos").
    static ref ALIAS_REGEX: Regex =
        Regex::new(&format!(r"\b({})\b", alias_alternation())).expect("Invalid regex pattern");

    /// "en <currency>" / "a <currency>" destination cue.
    static ref DESTINATION_CUE_REGEX: Regex = Regex::new(&format!(
        r"\b(?:en|a)\s+({}|{})\b",
        iso_alternation(),
        alias_alternation()
    ))
    .expect("Invalid regex pattern");
}

fn iso_alternation() -> String {
    CurrencyCode::ALL
        .iter()
        .map(|c| c.as_str().to_lowercase())
        .collect::<Vec<_>>()
        .join("|")
}

fn alias_alternation() -> String {
    aliases_longest_first()
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

fn resolve_phrase(phrase: &str) -> Option<CurrencyCode> {
    CurrencyCode::from_str(phrase)
        .ok()
        .or_else(|| resolve_alias(phrase))
}

/// A currency found in the text, with the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyMention {
    pub offset: usize,
    pub code: CurrencyCode,
}

/// Every ISO code and alias occurrence, ordered by offset.
pub fn find_mentions(text: &str) -> Vec<CurrencyMention> {
    let iso = ISO_CODE_REGEX.find_iter(text);
    let aliases = ALIAS_REGEX.find_iter(text);

    let mut mentions: Vec<CurrencyMention> = iso
        .chain(aliases)
        .filter_map(|m| {
            resolve_phrase(m.as_str()).map(|code| CurrencyMention {
                offset: m.start(),
                code,
            })
        })
        .collect();
    mentions.sort_by_key(|m| m.offset);
    mentions
}

/// Distinct currencies in order of first appearance.
pub fn mentioned_currencies(text: &str) -> Vec<CurrencyCode> {
    let mut codes: Vec<CurrencyCode> = Vec::new();
    for mention in find_mentions(text) {
        if !codes.contains(&mention.code) {
            codes.push(mention.code);
        }
    }
    codes
}

/// Currency named right after the first "en"/"a" preposition, if any.
pub fn find_destination_cue(text: &str) -> Option<CurrencyCode> {
    DESTINATION_CUE_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| resolve_phrase(m.as_str()))
}
