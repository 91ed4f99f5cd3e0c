//! Holding and valuation models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student's single simulated stock position.
///
/// Created exactly once per user and immutable thereafter. The creation
/// invariant guarantees `initial_value = shares * purchase_price` and
/// `initial_value <= STARTING_BALANCE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: Uuid,
    /// Owner; at most one holding per user, enforced by a unique constraint
    /// in the backing store.
    pub user_id: Uuid,
    /// Canonical exchange-suffixed symbol (e.g. "SHOP.TO").
    pub stock_symbol: String,
    /// Price per share at purchase time.
    pub purchase_price: Decimal,
    /// Whole shares purchased.
    pub shares: i64,
    /// Total cost at purchase (`shares * purchase_price`).
    pub initial_value: Decimal,
    pub purchase_date: DateTime<Utc>,
}

/// Insert payload for a new holding; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHolding {
    pub user_id: Uuid,
    pub stock_symbol: String,
    pub purchase_price: Decimal,
    pub shares: i64,
    pub initial_value: Decimal,
    pub purchase_date: DateTime<Utc>,
}

/// Current performance of a holding at a given price.
///
/// Derived data, recomputed on demand; never the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub user_id: Uuid,
    pub stock_symbol: String,
    pub shares: i64,
    pub initial_value: Decimal,
    pub current_price: Decimal,
    /// `shares * current_price`.
    pub current_value: Decimal,
    /// `current_value - initial_value`.
    pub total_return: Decimal,
    /// `total_return / initial_value * 100`.
    pub return_percentage: Decimal,
    /// Whole days since purchase.
    pub days_held: i64,
}

/// What a given amount of simulated funds buys at the current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPlan {
    pub stock_symbol: String,
    pub current_price: Decimal,
    pub available_funds: Decimal,
    /// `floor(available_funds / current_price)`.
    pub shares_purchasable: i64,
    pub total_cost: Decimal,
    pub remaining_funds: Decimal,
}
