//! Class-related error types.

use thiserror::Error;
use uuid::Uuid;

use crate::errors::StoreError;

/// Errors that can occur during class membership operations.
#[derive(Error, Debug)]
pub enum ClassError {
    /// The invite code is malformed or does not resolve to a class.
    #[error("Invalid invite code: {0}")]
    InvalidInviteCode(String),

    /// The class exists but is not currently running.
    #[error("Class {0} is not currently active")]
    ClassInactive(Uuid),

    /// The user is already a member of this class.
    #[error("User {user_id} is already a member of class {class_id}")]
    AlreadyMember { user_id: Uuid, class_id: Uuid },

    /// Memberships are append-only; students cannot leave a class.
    #[error("Leaving classes is not allowed")]
    LeaveNotAllowed,

    /// The requested class was not found.
    #[error("Class not found: {0}")]
    NotFound(Uuid),

    /// The membership store failed.
    #[error("Class store error: {0}")]
    Store(#[from] StoreError),
}
