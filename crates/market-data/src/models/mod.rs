//! Domain models for real-time market data.

mod quote;

pub use quote::{MarketStatus, RealTimeQuote};
