//! Portfolio-related error types.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::quotes::QuoteError;

/// Errors that can occur during portfolio operations.
///
/// Business-rule violations (`AlreadyInvested`, `BudgetExceeded`) are
/// surfaced to the caller without retries and leave no partial state.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Shares must be a positive integer.
    #[error("Share count must be positive, got {0}")]
    InvalidShares(i64),

    /// The user already holds a position; the single-shot investment model
    /// allows exactly one.
    #[error("User {0} already has a portfolio")]
    AlreadyInvested(Uuid),

    /// The investment would cost more than the available simulated funds.
    #[error("Investment of {cost} exceeds available funds of {limit}")]
    BudgetExceeded { cost: Decimal, limit: Decimal },

    /// The user has no holding to report on.
    #[error("No portfolio found for user {0}")]
    NoHolding(Uuid),

    /// Caller contract violation: the quote passed to valuation does not
    /// match the holding's symbol.
    #[error("Quote symbol {quote} does not match holding symbol {holding}")]
    SymbolMismatch { holding: String, quote: String },

    /// A holding with zero initial value has no defined return percentage.
    #[error("Holding has zero initial value")]
    ZeroInitialValue,

    /// Price lookup failed while creating or valuing a holding.
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// The holding store failed.
    #[error("Holding store error: {0}")]
    Store(#[from] StoreError),
}
