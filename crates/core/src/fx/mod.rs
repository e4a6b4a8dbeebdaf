//! FX - bridges market data providers into the responder.

mod market_rate_converter;

pub use market_rate_converter::MarketRateConverter;
