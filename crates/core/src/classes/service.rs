//! Class membership service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;

use super::errors::ClassError;
use super::model::{is_valid_invite_code, Class, ClassMembership, NewClassMembership};
use super::store::ClassStore;
use crate::constants::STARTING_BALANCE;
use crate::errors::StoreError;

/// Interface for class membership operations.
#[async_trait]
pub trait ClassServiceTrait: Send + Sync {
    /// Joins the class identified by `invite_code`, granting the fixed
    /// starting balance.
    async fn join_class(
        &self,
        user_id: Uuid,
        invite_code: &str,
    ) -> Result<ClassMembership, ClassError>;

    /// Resolves a class from an invite code without joining it.
    async fn class_by_invite_code(&self, invite_code: &str) -> Result<Class, ClassError>;

    /// Lists the user's memberships, most recent first.
    async fn memberships_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ClassMembership>, ClassError>;

    /// Returns true if the user belongs to the class.
    async fn is_member(&self, class_id: Uuid, user_id: Uuid) -> Result<bool, ClassError>;

    /// Always fails: memberships are append-only by policy.
    async fn leave_class(&self, user_id: Uuid, class_id: Uuid) -> Result<(), ClassError>;
}

/// Class membership service backed by the class store.
pub struct ClassService {
    store: Arc<dyn ClassStore>,
}

impl ClassService {
    pub fn new(store: Arc<dyn ClassStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClassServiceTrait for ClassService {
    async fn join_class(
        &self,
        user_id: Uuid,
        invite_code: &str,
    ) -> Result<ClassMembership, ClassError> {
        let class = self.class_by_invite_code(invite_code).await?;

        if !class.is_active {
            return Err(ClassError::ClassInactive(class.id));
        }

        // Optimistic pre-filter; the composite unique constraint is the
        // real enforcement point.
        if self
            .store
            .get_membership(user_id, class.id)
            .await?
            .is_some()
        {
            return Err(ClassError::AlreadyMember {
                user_id,
                class_id: class.id,
            });
        }

        let new_membership = NewClassMembership {
            user_id,
            class_id: class.id,
            starting_balance: STARTING_BALANCE,
            joined_at: Utc::now(),
        };

        let membership = match self.store.insert_membership(&new_membership).await {
            Ok(membership) => membership,
            Err(StoreError::UniqueViolation(_)) => {
                warn!(
                    "Concurrent join for user {} in class {}",
                    user_id, class.id
                );
                return Err(ClassError::AlreadyMember {
                    user_id,
                    class_id: class.id,
                });
            }
            Err(e) => return Err(e.into()),
        };

        info!("User {} joined class {} ({})", user_id, class.name, class.id);
        Ok(membership)
    }

    async fn class_by_invite_code(&self, invite_code: &str) -> Result<Class, ClassError> {
        let code = invite_code.trim().to_uppercase();
        if !is_valid_invite_code(&code) {
            return Err(ClassError::InvalidInviteCode(invite_code.to_string()));
        }

        self.store
            .find_class_by_invite_code(&code)
            .await?
            .ok_or(ClassError::InvalidInviteCode(code))
    }

    async fn memberships_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ClassMembership>, ClassError> {
        Ok(self.store.memberships_for_user(user_id).await?)
    }

    async fn is_member(&self, class_id: Uuid, user_id: Uuid) -> Result<bool, ClassError> {
        Ok(self
            .store
            .get_membership(user_id, class_id)
            .await?
            .is_some())
    }

    async fn leave_class(&self, _user_id: Uuid, _class_id: Uuid) -> Result<(), ClassError> {
        Err(ClassError::LeaveNotAllowed)
    }
}
