//! Tests for class joining rules.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::classes::{
        Class, ClassError, ClassMembership, ClassService, ClassServiceTrait, ClassStore,
        NewClassMembership,
    };
    use crate::constants::STARTING_BALANCE;
    use crate::errors::StoreError;

    // =========================================================================
    // Mock ClassStore
    // =========================================================================

    #[derive(Default)]
    struct MockClassStore {
        classes: Mutex<Vec<Class>>,
        memberships: Mutex<Vec<ClassMembership>>,
        hide_memberships_from_get: Mutex<bool>,
    }

    impl MockClassStore {
        fn new() -> Self {
            Self::default()
        }

        fn seed_class(&self, invite_code: &str, is_active: bool) -> Uuid {
            let class = Class {
                id: Uuid::new_v4(),
                name: "Intro to Investing".to_string(),
                semester: Some("Fall 2024".to_string()),
                invite_code: invite_code.to_string(),
                is_active,
                created_at: Utc::now(),
            };
            let id = class.id;
            self.classes.lock().unwrap().push(class);
            id
        }

        fn membership_count(&self, user_id: Uuid, class_id: Uuid) -> usize {
            self.memberships
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.user_id == user_id && m.class_id == class_id)
                .count()
        }

        fn set_hide_memberships_from_get(&self, hide: bool) {
            *self.hide_memberships_from_get.lock().unwrap() = hide;
        }
    }

    #[async_trait]
    impl ClassStore for MockClassStore {
        async fn get_class(&self, class_id: Uuid) -> Result<Option<Class>, StoreError> {
            Ok(self
                .classes
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == class_id)
                .cloned())
        }

        async fn find_class_by_invite_code(
            &self,
            code: &str,
        ) -> Result<Option<Class>, StoreError> {
            Ok(self
                .classes
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.invite_code == code)
                .cloned())
        }

        async fn get_membership(
            &self,
            user_id: Uuid,
            class_id: Uuid,
        ) -> Result<Option<ClassMembership>, StoreError> {
            if *self.hide_memberships_from_get.lock().unwrap() {
                return Ok(None);
            }
            Ok(self
                .memberships
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.user_id == user_id && m.class_id == class_id)
                .cloned())
        }

        async fn insert_membership(
            &self,
            new: &NewClassMembership,
        ) -> Result<ClassMembership, StoreError> {
            let mut memberships = self.memberships.lock().unwrap();
            if memberships
                .iter()
                .any(|m| m.user_id == new.user_id && m.class_id == new.class_id)
            {
                return Err(StoreError::UniqueViolation(
                    "class_memberships_user_id_class_id_key".to_string(),
                ));
            }
            let membership = ClassMembership {
                id: Uuid::new_v4(),
                user_id: new.user_id,
                class_id: new.class_id,
                starting_balance: new.starting_balance,
                joined_at: new.joined_at,
            };
            memberships.push(membership.clone());
            Ok(membership)
        }

        async fn memberships_for_user(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<ClassMembership>, StoreError> {
            let mut result: Vec<ClassMembership> = self
                .memberships
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.user_id == user_id)
                .cloned()
                .collect();
            result.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
            Ok(result)
        }

        async fn memberships_for_class(
            &self,
            class_id: Uuid,
        ) -> Result<Vec<ClassMembership>, StoreError> {
            Ok(self
                .memberships
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.class_id == class_id)
                .cloned()
                .collect())
        }
    }

    fn service(store: &Arc<MockClassStore>) -> ClassService {
        ClassService::new(store.clone())
    }

    // =========================================================================
    // Joining
    // =========================================================================

    #[tokio::test]
    async fn join_grants_starting_balance() {
        let store = Arc::new(MockClassStore::new());
        let class_id = store.seed_class("ABC123", true);
        let user = Uuid::new_v4();

        let membership = service(&store).join_class(user, "ABC123").await.unwrap();

        assert_eq!(membership.class_id, class_id);
        assert_eq!(membership.starting_balance, STARTING_BALANCE);
        assert_eq!(store.membership_count(user, class_id), 1);
    }

    #[tokio::test]
    async fn invite_code_is_case_insensitive() {
        let store = Arc::new(MockClassStore::new());
        store.seed_class("ABC123", true);
        let user = Uuid::new_v4();

        let membership = service(&store).join_class(user, "abc123").await.unwrap();
        assert_eq!(membership.user_id, user);
    }

    #[tokio::test]
    async fn malformed_invite_code_is_rejected() {
        let store = Arc::new(MockClassStore::new());
        store.seed_class("ABC123", true);
        let svc = service(&store);
        let user = Uuid::new_v4();

        for code in ["", "ABC12", "ABC-12", "ABC1234"] {
            let err = svc.join_class(user, code).await.unwrap_err();
            assert!(matches!(err, ClassError::InvalidInviteCode(_)));
        }
    }

    #[tokio::test]
    async fn unknown_invite_code_is_rejected() {
        let store = Arc::new(MockClassStore::new());
        store.seed_class("ABC123", true);

        let err = service(&store)
            .join_class(Uuid::new_v4(), "XYZ789")
            .await
            .unwrap_err();

        assert!(matches!(err, ClassError::InvalidInviteCode(_)));
    }

    #[tokio::test]
    async fn inactive_class_cannot_be_joined() {
        let store = Arc::new(MockClassStore::new());
        let class_id = store.seed_class("ABC123", false);

        let err = service(&store)
            .join_class(Uuid::new_v4(), "ABC123")
            .await
            .unwrap_err();

        assert!(matches!(err, ClassError::ClassInactive(id) if id == class_id));
    }

    #[tokio::test]
    async fn joining_twice_fails_with_already_member() {
        let store = Arc::new(MockClassStore::new());
        let class_id = store.seed_class("ABC123", true);
        let svc = service(&store);
        let user = Uuid::new_v4();

        svc.join_class(user, "ABC123").await.unwrap();
        let err = svc.join_class(user, "ABC123").await.unwrap_err();

        assert!(matches!(err, ClassError::AlreadyMember { .. }));
        assert_eq!(store.membership_count(user, class_id), 1);
    }

    #[tokio::test]
    async fn lost_join_race_maps_to_already_member() {
        let store = Arc::new(MockClassStore::new());
        let class_id = store.seed_class("ABC123", true);
        let svc = service(&store);
        let user = Uuid::new_v4();

        svc.join_class(user, "ABC123").await.unwrap();
        store.set_hide_memberships_from_get(true);
        let err = svc.join_class(user, "ABC123").await.unwrap_err();

        assert!(matches!(err, ClassError::AlreadyMember { .. }));
        assert_eq!(store.membership_count(user, class_id), 1);
    }

    // =========================================================================
    // Membership queries and policy
    // =========================================================================

    #[tokio::test]
    async fn is_member_reflects_membership() {
        let store = Arc::new(MockClassStore::new());
        let class_id = store.seed_class("ABC123", true);
        let svc = service(&store);
        let user = Uuid::new_v4();

        assert!(!svc.is_member(class_id, user).await.unwrap());
        svc.join_class(user, "ABC123").await.unwrap();
        assert!(svc.is_member(class_id, user).await.unwrap());
    }

    #[tokio::test]
    async fn leaving_a_class_is_not_allowed() {
        let store = Arc::new(MockClassStore::new());
        let class_id = store.seed_class("ABC123", true);
        let svc = service(&store);
        let user = Uuid::new_v4();

        svc.join_class(user, "ABC123").await.unwrap();
        let err = svc.leave_class(user, class_id).await.unwrap_err();

        assert!(matches!(err, ClassError::LeaveNotAllowed));
        assert_eq!(store.membership_count(user, class_id), 1);
    }
}
