//! Class and membership models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Required length of an invite code (uppercase alphanumerics).
pub const INVITE_CODE_LEN: usize = 6;

/// A classroom cohort students join via invite code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    pub semester: Option<String>,
    /// Six uppercase alphanumeric characters.
    pub invite_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A student's membership in a class.
///
/// At most one per (user, class) pair; append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMembership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub class_id: Uuid,
    /// Simulated funds granted on joining; fixed for every student.
    pub starting_balance: Decimal,
    pub joined_at: DateTime<Utc>,
}

/// Insert payload for a new membership; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClassMembership {
    pub user_id: Uuid,
    pub class_id: Uuid,
    pub starting_balance: Decimal,
    pub joined_at: DateTime<Utc>,
}

/// Returns true if `code` has the required invite code shape: exactly six
/// uppercase ASCII alphanumerics.
pub fn is_valid_invite_code(code: &str) -> bool {
    code.len() == INVITE_CODE_LEN
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_codes() {
        assert!(is_valid_invite_code("ABC123"));
        assert!(is_valid_invite_code("ZZZZZZ"));
        assert!(is_valid_invite_code("000000"));
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(!is_valid_invite_code(""));
        assert!(!is_valid_invite_code("ABC12"));
        assert!(!is_valid_invite_code("ABC1234"));
        assert!(!is_valid_invite_code("abc123"));
        assert!(!is_valid_invite_code("ABC-12"));
    }
}
