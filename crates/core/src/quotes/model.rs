//! Cached stock quote model.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use classtrade_market_data::{MarketStatus, RealTimeQuote};

use super::constants::STALE_THRESHOLD_MINUTES;

/// A cached stock price record, one row per symbol.
///
/// Owned by the price cache store and mutated only through the price
/// service's upsert path. Rows are overwritten in place, never deleted.
///
/// `company_name` is seeded when the stock catalog is populated; the upstream
/// provider never supplies it, so refreshes preserve whatever the cache holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    /// Canonical exchange-suffixed symbol (e.g. "SHOP.TO"). Cache key.
    pub symbol: String,
    /// Display name of the company, if known.
    pub company_name: Option<String>,
    /// Last known trade price. Positive for any valid record.
    pub current_price: Decimal,
    /// Previous session close.
    pub previous_close: Decimal,
    /// Absolute change since previous close.
    pub day_change: Decimal,
    /// Percent change since previous close.
    pub day_change_percent: Decimal,
    /// Trading status at the time of the last refresh.
    pub market_status: MarketStatus,
    /// When this record was last refreshed. `None` forces a refresh on the
    /// next read.
    pub last_updated: Option<DateTime<Utc>>,
}

impl StockQuote {
    /// Returns true if this record is older than the staleness threshold
    /// (or has never been refreshed).
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match self.last_updated {
            Some(updated) => now - updated > Duration::minutes(STALE_THRESHOLD_MINUTES),
            None => true,
        }
    }

    /// Builds the refreshed record from a provider quote, carrying over the
    /// cached company name.
    pub fn from_fetch(
        fetched: &RealTimeQuote,
        cached: Option<&StockQuote>,
        now: DateTime<Utc>,
    ) -> StockQuote {
        StockQuote {
            symbol: fetched.symbol.clone(),
            company_name: cached.and_then(|c| c.company_name.clone()),
            current_price: fetched.current_price,
            previous_close: fetched.previous_close,
            day_change: fetched.day_change,
            day_change_percent: fetched.day_change_percent,
            market_status: fetched.market_status,
            last_updated: Some(now),
        }
    }
}
