//! Exchange rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `FxRateProvider` trait that all providers implement
//! - Concrete provider implementations (Frankfurter)

mod traits;

pub mod frankfurter;

// Re-exports
pub use traits::FxRateProvider;
