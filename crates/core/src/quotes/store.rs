//! Price cache storage trait.

use async_trait::async_trait;

use super::model::StockQuote;
use crate::errors::StoreError;

/// Storage interface for the price cache.
///
/// One row per symbol with upsert-by-key semantics. Concurrent upserts of the
/// same symbol race harmlessly: last write wins on `last_updated`.
///
/// All freshness decisions go through the price service; nothing else should
/// write to this store.
#[async_trait]
pub trait QuoteCacheStore: Send + Sync {
    /// Reads the cached quote for a canonical symbol, if one exists.
    async fn get(&self, symbol: &str) -> Result<Option<StockQuote>, StoreError>;

    /// Inserts or overwrites the cached quote for its symbol.
    ///
    /// Returns the persisted record.
    async fn upsert(&self, quote: &StockQuote) -> Result<StockQuote, StoreError>;

    /// Lists cached quotes ordered by company name, up to `limit` rows.
    async fn list(&self, limit: i64) -> Result<Vec<StockQuote>, StoreError>;

    /// Case-insensitive substring search over symbol and company name.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<StockQuote>, StoreError>;
}
