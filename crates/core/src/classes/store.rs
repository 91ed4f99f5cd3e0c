//! Class and membership storage trait.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Class, ClassMembership, NewClassMembership};
use crate::errors::StoreError;

/// Storage interface for classes and memberships.
///
/// Implementations MUST enforce a composite unique constraint on
/// (user_id, class_id); the service-level membership check is an optimistic
/// pre-filter only.
#[async_trait]
pub trait ClassStore: Send + Sync {
    /// Reads a class by id.
    async fn get_class(&self, class_id: Uuid) -> Result<Option<Class>, StoreError>;

    /// Resolves a class from its invite code (codes are stored uppercase).
    async fn find_class_by_invite_code(&self, code: &str) -> Result<Option<Class>, StoreError>;

    /// Reads the membership for a (user, class) pair, if any.
    async fn get_membership(
        &self,
        user_id: Uuid,
        class_id: Uuid,
    ) -> Result<Option<ClassMembership>, StoreError>;

    /// Inserts a membership as a single atomic write.
    ///
    /// Fails with [`StoreError::UniqueViolation`] if the pair already exists.
    async fn insert_membership(
        &self,
        membership: &NewClassMembership,
    ) -> Result<ClassMembership, StoreError>;

    /// Lists a user's memberships, most recent first.
    async fn memberships_for_user(&self, user_id: Uuid) -> Result<Vec<ClassMembership>, StoreError>;

    /// Lists a class's memberships in join order. Used by the leaderboard
    /// to scope rankings to a class.
    async fn memberships_for_class(
        &self,
        class_id: Uuid,
    ) -> Result<Vec<ClassMembership>, StoreError>;
}
