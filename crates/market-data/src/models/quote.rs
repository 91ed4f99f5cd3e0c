//! Real-time quote models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Market Status
// =============================================================================

/// Trading status of the market at the time a quote was produced.
///
/// The upstream provider does not report this directly, so freshly fetched
/// quotes default to [`MarketStatus::Open`]; cached rows may carry any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MarketStatus {
    #[default]
    Open,
    Closed,
    PreMarket,
    AfterHours,
}

impl MarketStatus {
    /// Returns the string identifier for this market status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStatus::Open => "open",
            MarketStatus::Closed => "closed",
            MarketStatus::PreMarket => "pre-market",
            MarketStatus::AfterHours => "after-hours",
        }
    }
}

impl From<&str> for MarketStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "closed" => MarketStatus::Closed,
            "pre-market" => MarketStatus::PreMarket,
            "after-hours" => MarketStatus::AfterHours,
            _ => MarketStatus::Open,
        }
    }
}

// =============================================================================
// Real-Time Quote
// =============================================================================

/// A single real-time quote as returned by the upstream provider.
///
/// The symbol is kept in the canonical TSX form (`SHOP.TO`) regardless of the
/// provider-side format used for the request. Company metadata is not part of
/// this type; the provider does not supply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeQuote {
    /// Canonical exchange-suffixed symbol (e.g. "SHOP.TO").
    pub symbol: String,
    /// Last traded price. Always positive for a valid quote.
    pub current_price: Decimal,
    /// Previous session close.
    pub previous_close: Decimal,
    /// Absolute change since previous close.
    pub day_change: Decimal,
    /// Percent change since previous close.
    pub day_change_percent: Decimal,
    /// Trading status; the provider reports quotes as live.
    pub market_status: MarketStatus,
    /// When this quote was fetched.
    pub fetched_at: DateTime<Utc>,
}
