//! Account Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_id::AccountId, email::Email, password::PasswordHash, role::Role, username::Username,
};

/// A stored account record.
///
/// Only the store constructs these: `id` and the timestamps are assigned
/// at insert time. The password hash never leaves this type except through
/// [`Account::verify_password`].
#[derive(Debug, Clone)]
pub struct Account {
    /// Store-assigned identifier, immutable
    pub id: AccountId,
    /// Unique login/display name
    pub username: Username,
    /// Unique contact address
    pub email: Email,
    /// Opaque salted hash blob
    pub password_hash: PasswordHash,
    /// member or admin
    pub role: Role,
    /// False until approved (self-signups) or true from creation
    /// (admin-created)
    pub is_active: bool,
    /// Set by the store on insert
    pub created_at: DateTime<Utc>,
    /// Set by the store on insert and on activate/deactivate
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Whether this account may authenticate.
    pub fn can_login(&self) -> bool {
        self.is_active
    }

    /// Constant-time password check against the stored hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password_hash.verify(candidate)
    }
}

/// Input for [`AccountStore::insert`](crate::domain::repository::AccountStore::insert).
///
/// Carries everything the caller decides; the store adds `id` and
/// timestamps.
#[derive(Debug)]
pub struct NewAccount {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(is_active: bool) -> Account {
        let now = Utc::now();
        Account {
            id: AccountId::new(1),
            username: Username::new("alice").unwrap(),
            email: Email::new("alice@example.com").unwrap(),
            password_hash: PasswordHash::new(
                platform::password::hash_password("abcdef").unwrap(),
            ),
            role: Role::Member,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_can_login_follows_active_flag() {
        assert!(account(true).can_login());
        assert!(!account(false).can_login());
    }

    #[test]
    fn test_verify_password() {
        let account = account(true);
        assert!(account.verify_password("abcdef"));
        assert!(!account.verify_password("wrong"));
    }

    #[test]
    fn test_debug_never_prints_hash() {
        let account = account(true);
        let debug = format!("{:?}", account);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(account.password_hash.as_str()));
    }
}
