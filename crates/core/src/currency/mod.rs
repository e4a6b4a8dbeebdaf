//! Currency catalog and Spanish alias table.

mod aliases;
mod currency_model;

pub use aliases::{aliases_longest_first, resolve_alias};
pub use currency_model::CurrencyCode;
