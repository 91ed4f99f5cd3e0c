//! Provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::RealTimeQuote;

/// Interface for an upstream real-time quote source.
///
/// Implementations are stateless: one request per call, no caching. Freshness
/// and fallback decisions belong to the caller.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetches a single real-time quote for a canonical TSX symbol
    /// (e.g. "SHOP.TO").
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::ApiKeyMissing`] before any network call if
    /// the provider has no credentials, and the appropriate variant for
    /// network, rate-limit, and parse failures.
    async fn fetch_quote(&self, symbol: &str) -> Result<RealTimeQuote, MarketDataError>;
}
