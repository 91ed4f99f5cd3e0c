//! Holding storage trait.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Holding, NewHolding};
use crate::errors::StoreError;

/// Storage interface for holdings.
///
/// Implementations MUST enforce a unique constraint on `user_id`: the
/// service-level "already invested" check is an optimistic pre-filter, and
/// two concurrent creates for the same user are resolved only by the store
/// rejecting the second insert with [`StoreError::UniqueViolation`].
#[async_trait]
pub trait HoldingStore: Send + Sync {
    /// Reads the holding for a user, if one exists.
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<Holding>, StoreError>;

    /// Inserts a new holding as a single atomic write.
    ///
    /// Fails with [`StoreError::UniqueViolation`] if the user already has
    /// one; nothing is persisted in that case.
    async fn insert(&self, holding: &NewHolding) -> Result<Holding, StoreError>;

    /// Lists every holding. Used by the leaderboard.
    async fn list_all(&self) -> Result<Vec<Holding>, StoreError>;
}
