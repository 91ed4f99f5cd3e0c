//! Quote-related error types.

use thiserror::Error;

use crate::errors::StoreError;
use classtrade_market_data::MarketDataError;

/// Errors that can occur during price lookups.
///
/// Low-level provider failures are caught at the price service boundary and
/// converted to either a successful stale-cache response or one of these
/// variants; raw transport errors never leak to valuation or ranking code.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The caller supplied an empty symbol.
    #[error("Stock symbol is required")]
    EmptySymbol,

    /// The symbol has neither a cached quote nor a successful fetch.
    #[error("No quote available for {0}")]
    NotFound(String),

    /// The upstream provider is misconfigured (missing/invalid credentials).
    /// Fatal and surfaced immediately; never masked by the cache.
    #[error("Market data provider is not configured: {0}")]
    Configuration(String),

    /// The upstream provider failed and no cached quote was available to
    /// fall back on.
    #[error("Upstream quote provider unavailable: {0}")]
    UpstreamUnavailable(#[source] MarketDataError),

    /// The price cache store failed on a path where availability could not
    /// be preserved.
    #[error("Price cache error: {0}")]
    Store(#[from] StoreError),
}

impl From<MarketDataError> for QuoteError {
    fn from(error: MarketDataError) -> Self {
        if error.is_configuration() {
            QuoteError::Configuration(error.to_string())
        } else {
            QuoteError::UpstreamUnavailable(error)
        }
    }
}
