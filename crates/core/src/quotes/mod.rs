//! Quote management module.
//!
//! This module owns the stock price cache and the freshness policy that
//! decides when to serve a cached quote versus refetching from the upstream
//! provider:
//!
//! - [`model`] - The cached stock quote record
//! - [`store`] - Storage trait for the price cache
//! - [`service`] - Read-through price service with staleness + fallback logic
//! - [`errors`] - Quote error taxonomy
//! - [`constants`] - Staleness threshold

pub mod constants;
pub mod errors;
pub mod model;
pub mod service;
pub mod store;


pub use constants::*;
pub use errors::QuoteError;
pub use model::StockQuote;
pub use service::{PriceService, PriceServiceTrait};
pub use store::QuoteCacheStore;
