//! Classtrade Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the classroom stock-trading
//! simulator: the price cache freshness policy, portfolio valuation, the
//! single-shot investment rules, class memberships, and leaderboard ranking.
//! It is storage-agnostic: the backing store is reached only through the
//! traits defined in each module.

pub mod classes;
pub mod constants;
pub mod errors;
pub mod leaderboard;
pub mod portfolio;
pub mod quotes;

// Re-export commonly used types
pub use classes::{Class, ClassMembership, ClassService, ClassServiceTrait, ClassStore};
pub use leaderboard::{LeaderboardEntry, LeaderboardService, LeaderboardServiceTrait};
pub use portfolio::{
    Holding, HoldingStore, NewHolding, PortfolioService, PortfolioServiceTrait, Valuation,
};
pub use quotes::{PriceService, PriceServiceTrait, QuoteCacheStore, StockQuote};

// Re-export error types
pub use errors::{Error, Result, StoreError};
