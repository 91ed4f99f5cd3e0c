//! Leaderboard ranking service.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

use super::model::LeaderboardEntry;
use crate::classes::ClassStore;
use crate::errors::Result;
use crate::portfolio::{valuate, HoldingStore, Valuation};
use crate::quotes::{PriceServiceTrait, QuoteError, StockQuote};

/// Sorts valuations and assigns ranks.
///
/// Descending by return percentage, with ascending user id as the
/// deterministic tie-break; rank is the 1-based position in sort order.
pub fn rank_valuations(mut valuations: Vec<Valuation>) -> Vec<LeaderboardEntry> {
    valuations.sort_by(|a, b| {
        b.return_percentage
            .cmp(&a.return_percentage)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    valuations
        .into_iter()
        .enumerate()
        .map(|(i, valuation)| LeaderboardEntry {
            rank: i as u32 + 1,
            valuation,
        })
        .collect()
}

/// Interface for leaderboard reads.
#[async_trait]
pub trait LeaderboardServiceTrait: Send + Sync {
    /// Computes the leaderboard, optionally scoped to a class.
    ///
    /// Users whose symbol has neither a cached nor a fetchable price are
    /// skipped: the read degrades to best-available data instead of failing.
    /// A misconfigured provider is never degraded over; it fails the read.
    async fn leaderboard(&self, class_id: Option<Uuid>) -> Result<Vec<LeaderboardEntry>>;

    /// Returns a user's entry within a class leaderboard, if present.
    async fn user_rank(
        &self,
        class_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<LeaderboardEntry>>;
}

/// Leaderboard service assembling valuations from stores and fresh prices.
pub struct LeaderboardService {
    holdings: Arc<dyn HoldingStore>,
    classes: Arc<dyn ClassStore>,
    prices: Arc<dyn PriceServiceTrait>,
}

impl LeaderboardService {
    pub fn new(
        holdings: Arc<dyn HoldingStore>,
        classes: Arc<dyn ClassStore>,
        prices: Arc<dyn PriceServiceTrait>,
    ) -> Self {
        Self {
            holdings,
            classes,
            prices,
        }
    }

    /// Fetches one fresh price per distinct symbol, memoized for the call.
    ///
    /// Transient lookup failures degrade to `None` (the symbol's holdings are
    /// skipped); a misconfigured provider is an operator fault and fails the
    /// whole read.
    async fn price_for(
        &self,
        memo: &mut HashMap<String, Option<StockQuote>>,
        symbol: &str,
    ) -> std::result::Result<Option<StockQuote>, QuoteError> {
        if let Some(hit) = memo.get(symbol) {
            return Ok(hit.clone());
        }
        let quote = match self.prices.get_fresh_price(symbol, false).await {
            Ok(quote) => Some(quote),
            Err(e @ QuoteError::Configuration(_)) => return Err(e),
            Err(e) => {
                warn!("Skipping leaderboard entries for {}: {}", symbol, e);
                None
            }
        };
        memo.insert(symbol.to_string(), quote.clone());
        Ok(quote)
    }
}

#[async_trait]
impl LeaderboardServiceTrait for LeaderboardService {
    async fn leaderboard(&self, class_id: Option<Uuid>) -> Result<Vec<LeaderboardEntry>> {
        let mut holdings = self.holdings.list_all().await?;

        if let Some(class_id) = class_id {
            let members: HashSet<Uuid> = self
                .classes
                .memberships_for_class(class_id)
                .await?
                .into_iter()
                .map(|m| m.user_id)
                .collect();
            holdings.retain(|h| members.contains(&h.user_id));
        }

        let now = Utc::now();
        let mut price_memo: HashMap<String, Option<StockQuote>> = HashMap::new();
        let mut valuations = Vec::with_capacity(holdings.len());

        for holding in &holdings {
            let quote = match self
                .price_for(&mut price_memo, &holding.stock_symbol)
                .await?
            {
                Some(quote) => quote,
                None => continue,
            };
            match valuate(holding, &quote, now) {
                Ok(valuation) => valuations.push(valuation),
                Err(e) => {
                    warn!(
                        "Skipping leaderboard entry for user {}: {}",
                        holding.user_id, e
                    );
                }
            }
        }

        debug!(
            "Ranked {} of {} holdings (class filter: {:?})",
            valuations.len(),
            holdings.len(),
            class_id
        );
        Ok(rank_valuations(valuations))
    }

    async fn user_rank(
        &self,
        class_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<LeaderboardEntry>> {
        let entries = self.leaderboard(Some(class_id)).await?;
        Ok(entries
            .into_iter()
            .find(|entry| entry.valuation.user_id == user_id))
    }
}
