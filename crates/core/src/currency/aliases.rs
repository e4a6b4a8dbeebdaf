use std::collections::HashMap;
use std::sync::OnceLock;

use super::currency_model::CurrencyCode;

/// Spanish surface forms, lowercase, with and without diacritics.
const ALIASES: &[(&str, CurrencyCode)] = &[
    // USD
    ("dólares", CurrencyCode::Usd),
    ("dolares", CurrencyCode::Usd),
    ("dólar", CurrencyCode::Usd),
    ("dolar", CurrencyCode::Usd),
    ("dólares americanos", CurrencyCode::Usd),
    ("dolares americanos", CurrencyCode::Usd),
    ("dólar americano", CurrencyCode::Usd),
    ("dolar americano", CurrencyCode::Usd),
    ("dólares estadounidenses", CurrencyCode::Usd),
    ("dolares estadounidenses", CurrencyCode::Usd),
    ("dólar estadounidense", CurrencyCode::Usd),
    ("dolar estadounidense", CurrencyCode::Usd),
    ("dólares us", CurrencyCode::Usd),
    ("dolares us", CurrencyCode::Usd),
    // AUD
    ("dólares australianos", CurrencyCode::Aud),
    ("dolares australianos", CurrencyCode::Aud),
    ("dólar australiano", CurrencyCode::Aud),
    ("dolar australiano", CurrencyCode::Aud),
    // EUR
    ("euros", CurrencyCode::Eur),
    ("euro", CurrencyCode::Eur),
    // GBP
    ("libras esterlinas", CurrencyCode::Gbp),
    ("libra esterlina", CurrencyCode::Gbp),
    ("libras", CurrencyCode::Gbp),
    ("libra", CurrencyCode::Gbp),
    // ARS
    ("pesos argentinos", CurrencyCode::Ars),
    ("peso argentino", CurrencyCode::Ars),
    // BRL
    ("reales brasileños", CurrencyCode::Brl),
    ("reales brasilenos", CurrencyCode::Brl),
    ("real brasileño", CurrencyCode::Brl),
    ("real brasileno", CurrencyCode::Brl),
    ("reales", CurrencyCode::Brl),
    // CLP
    ("pesos chilenos", CurrencyCode::Clp),
    ("peso chileno", CurrencyCode::Clp),
    // COP; bare "pesos" defaults to the Colombian peso
    ("pesos colombianos", CurrencyCode::Cop),
    ("peso colombiano", CurrencyCode::Cop),
    ("pesos", CurrencyCode::Cop),
    // MXN
    ("pesos mexicanos", CurrencyCode::Mxn),
    ("peso mexicano", CurrencyCode::Mxn),
    // PEN
    ("soles peruanos", CurrencyCode::Pen),
    ("sol peruano", CurrencyCode::Pen),
    ("soles", CurrencyCode::Pen),
];

static ALIAS_TABLE: OnceLock<HashMap<&'static str, CurrencyCode>> = OnceLock::new();

fn get_table() -> &'static HashMap<&'static str, CurrencyCode> {
    ALIAS_TABLE.get_or_init(|| ALIASES.iter().copied().collect())
}

/// Resolves a lowercase Spanish alias to its currency.
pub fn resolve_alias(phrase: &str) -> Option<CurrencyCode> {
    get_table().get(phrase).copied()
}

/// All aliases ordered longest first (ties alphabetical), so that an
/// alternation built from them prefers the most specific phrase.
pub fn aliases_longest_first() -> Vec<&'static str> {
    let mut aliases: Vec<&'static str> = get_table().keys().copied().collect();
    aliases.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    aliases
}
