//! Price freshness service.
//!
//! A read-through buffer between the UI and the upstream quote provider.
//! The cache shields reads from provider rate limits and outages: staleness
//! is tolerated up to a threshold, and on provider failure the service
//! prefers serving stale data over failing the read.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};

use classtrade_market_data::{normalize_tsx, QuoteProvider};

use super::constants::{DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT};
use super::errors::QuoteError;
use super::model::StockQuote;
use super::store::QuoteCacheStore;

/// Interface for fresh price reads.
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Returns the current quote for a symbol, refreshing the cache when it
    /// is stale or missing.
    ///
    /// `force_refresh` bypasses the staleness check and always contacts the
    /// provider (still falling back to the cache on failure).
    async fn get_fresh_price(
        &self,
        symbol: &str,
        force_refresh: bool,
    ) -> Result<StockQuote, QuoteError>;

    /// Lists the cached stock catalog.
    async fn list_stocks(&self, limit: Option<i64>) -> Result<Vec<StockQuote>, QuoteError>;

    /// Searches cached stocks by symbol or company name. Queries shorter
    /// than two characters return an empty result.
    async fn search_stocks(
        &self,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<StockQuote>, QuoteError>;
}

/// Price freshness service backed by a cache store and a quote provider.
pub struct PriceService {
    store: Arc<dyn QuoteCacheStore>,
    provider: Arc<dyn QuoteProvider>,
}

impl PriceService {
    pub fn new(store: Arc<dyn QuoteCacheStore>, provider: Arc<dyn QuoteProvider>) -> Self {
        Self { store, provider }
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn get_fresh_price(
        &self,
        symbol: &str,
        force_refresh: bool,
    ) -> Result<StockQuote, QuoteError> {
        if symbol.trim().is_empty() {
            return Err(QuoteError::EmptySymbol);
        }
        let symbol = normalize_tsx(symbol);

        // A cache read failure is treated as a miss: the provider path below
        // can still satisfy the read.
        let cached = match self.store.get(&symbol).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!("Price cache read failed for {}: {}", symbol, e);
                None
            }
        };

        let now = Utc::now();
        let should_refresh =
            force_refresh || cached.as_ref().map_or(true, |c| c.is_stale(now));

        if !should_refresh {
            if let Some(cached) = cached {
                debug!("Serving cached quote for {}", symbol);
                return Ok(cached);
            }
        }

        match self.provider.fetch_quote(&symbol).await {
            Ok(fetched) => {
                let record = StockQuote::from_fetch(&fetched, cached.as_ref(), now);
                match self.store.upsert(&record).await {
                    Ok(saved) => Ok(saved),
                    Err(e) => {
                        // Cache durability is best-effort; read availability
                        // is not.
                        warn!(
                            "Failed to update price cache for {}: {}. Returning fetched data.",
                            symbol, e
                        );
                        Ok(record)
                    }
                }
            }
            Err(e) if e.is_configuration() => Err(QuoteError::Configuration(e.to_string())),
            Err(e) => match cached {
                Some(cached) => {
                    warn!(
                        "Provider failed for {} ({}), serving cached quote from {:?}",
                        symbol, e, cached.last_updated
                    );
                    Ok(cached)
                }
                None if e.is_not_found() => Err(QuoteError::NotFound(symbol)),
                None => Err(QuoteError::UpstreamUnavailable(e)),
            },
        }
    }

    async fn list_stocks(&self, limit: Option<i64>) -> Result<Vec<StockQuote>, QuoteError> {
        Ok(self
            .store
            .list(limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .await?)
    }

    async fn search_stocks(
        &self,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<StockQuote>, QuoteError> {
        let query = query.trim();
        if query.len() < 2 {
            return Ok(Vec::new());
        }
        Ok(self
            .store
            .search(query, limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
            .await?)
    }
}
