//! Investment eligibility and portfolio performance service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::errors::PortfolioError;
use super::model::{Holding, InvestmentPlan, NewHolding, Valuation};
use super::store::HoldingStore;
use super::valuation::valuate;
use crate::constants::STARTING_BALANCE;
use crate::errors::StoreError;
use crate::quotes::PriceServiceTrait;

/// Interface for portfolio operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Creates the user's single holding at the current market price.
    ///
    /// Exactly one durable write on success; business-rule failures leave
    /// nothing persisted.
    async fn create_holding(
        &self,
        user_id: Uuid,
        symbol: &str,
        shares: i64,
    ) -> Result<Holding, PortfolioError>;

    /// Reads the user's holding, if any.
    async fn get_holding(&self, user_id: Uuid) -> Result<Option<Holding>, PortfolioError>;

    /// Returns the user's current performance (fresh price + valuation).
    async fn get_performance(&self, user_id: Uuid) -> Result<Valuation, PortfolioError>;

    /// Returns true if the user has no holding yet.
    async fn can_create(&self, user_id: Uuid) -> Result<bool, PortfolioError>;

    /// Computes what `funds` buys of `symbol` at the current price.
    async fn plan_investment(
        &self,
        symbol: &str,
        funds: Decimal,
    ) -> Result<InvestmentPlan, PortfolioError>;
}

/// Portfolio service backed by the holding store and the price service.
pub struct PortfolioService {
    holdings: Arc<dyn HoldingStore>,
    prices: Arc<dyn PriceServiceTrait>,
}

impl PortfolioService {
    pub fn new(holdings: Arc<dyn HoldingStore>, prices: Arc<dyn PriceServiceTrait>) -> Self {
        Self { holdings, prices }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn create_holding(
        &self,
        user_id: Uuid,
        symbol: &str,
        shares: i64,
    ) -> Result<Holding, PortfolioError> {
        if shares <= 0 {
            return Err(PortfolioError::InvalidShares(shares));
        }

        // Optimistic pre-filter for a friendlier error; the store's unique
        // constraint on user_id is the real enforcement point.
        if self.holdings.get_by_user(user_id).await?.is_some() {
            return Err(PortfolioError::AlreadyInvested(user_id));
        }

        let quote = self.prices.get_fresh_price(symbol, false).await?;

        let purchase_price = quote.current_price;
        let total_cost = Decimal::from(shares) * purchase_price;
        if total_cost > STARTING_BALANCE {
            return Err(PortfolioError::BudgetExceeded {
                cost: total_cost,
                limit: STARTING_BALANCE,
            });
        }

        let new_holding = NewHolding {
            user_id,
            stock_symbol: quote.symbol.clone(),
            purchase_price,
            shares,
            initial_value: total_cost,
            purchase_date: Utc::now(),
        };

        let holding = match self.holdings.insert(&new_holding).await {
            Ok(holding) => holding,
            // Lost the race against a concurrent create for the same user.
            Err(StoreError::UniqueViolation(_)) => {
                warn!("Concurrent portfolio create for user {}", user_id);
                return Err(PortfolioError::AlreadyInvested(user_id));
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "Created portfolio for user {}: {} x {} @ {} (cost {})",
            user_id, shares, holding.stock_symbol, purchase_price, total_cost
        );
        Ok(holding)
    }

    async fn get_holding(&self, user_id: Uuid) -> Result<Option<Holding>, PortfolioError> {
        Ok(self.holdings.get_by_user(user_id).await?)
    }

    async fn get_performance(&self, user_id: Uuid) -> Result<Valuation, PortfolioError> {
        let holding = self
            .holdings
            .get_by_user(user_id)
            .await?
            .ok_or(PortfolioError::NoHolding(user_id))?;

        let quote = self
            .prices
            .get_fresh_price(&holding.stock_symbol, false)
            .await?;

        valuate(&holding, &quote, Utc::now())
    }

    async fn can_create(&self, user_id: Uuid) -> Result<bool, PortfolioError> {
        Ok(self.holdings.get_by_user(user_id).await?.is_none())
    }

    async fn plan_investment(
        &self,
        symbol: &str,
        funds: Decimal,
    ) -> Result<InvestmentPlan, PortfolioError> {
        let quote = self.prices.get_fresh_price(symbol, false).await?;
        let current_price = quote.current_price;

        // Guards against a corrupted cache row; `Decimal` division by zero
        // panics rather than returning an error.
        let shares_purchasable = if current_price > Decimal::ZERO {
            (funds / current_price).floor().to_i64().unwrap_or(0).max(0)
        } else {
            0
        };
        let total_cost = Decimal::from(shares_purchasable) * current_price;

        Ok(InvestmentPlan {
            stock_symbol: quote.symbol,
            current_price,
            available_funds: funds,
            shares_purchasable,
            total_cost,
            remaining_funds: funds - total_cost,
        })
    }
}
