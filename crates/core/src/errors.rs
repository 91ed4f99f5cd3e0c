//! Core error types.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from whichever backing store implements the store traits) are converted
//! to [`StoreError`] by the storage layer.

use thiserror::Error;

use crate::classes::ClassError;
use crate::portfolio::PortfolioError;
use crate::quotes::QuoteError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the simulator core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Quote operation failed: {0}")]
    Quote(#[from] QuoteError),

    #[error("Portfolio operation failed: {0}")]
    Portfolio(#[from] PortfolioError),

    #[error("Class operation failed: {0}")]
    Class(#[from] ClassError),

    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),
}

/// Storage-agnostic error type for store operations.
///
/// The backing store is an external collaborator; its driver errors are
/// converted into this format at the trait implementation boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g. duplicate key).
    ///
    /// This is the real enforcement point for at-most-one-holding-per-user
    /// and one-membership-per-(user, class); the service-level checks are
    /// optimistic pre-filters only.
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A store query failed to execute.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// Failed to reach the backing store.
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),
}
