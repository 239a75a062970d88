//! In-Memory Demo Store
//!
//! Zero-configuration fallback used when no database is configured. It
//! seeds two fixed accounts and acknowledges writes without keeping them,
//! so every process restart starts from the same state. Reads answer from
//! the seeds; the response shapes match the durable store exactly, only
//! the accompanying message text differs.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, Utc};

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::{AccountStore, StoreMode};
use crate::domain::value_object::{
    account_id::AccountId, email::Email, password::PasswordHash, role::Role, username::Username,
};
use crate::error::IdentityResult;

/// In-memory account store with fixed demo data.
pub struct MemoryAccountStore {
    accounts: Vec<Account>,
    next_id: AtomicI64,
}

impl MemoryAccountStore {
    /// Build the demo store with its two seed accounts
    /// (`admin`/`admin123` and `member`/`member123`).
    ///
    /// Hashes the two seed passwords, so this takes a moment; call it
    /// once at startup.
    pub fn demo() -> IdentityResult<Self> {
        let now = Utc::now();
        let accounts = vec![
            seed_account(
                1,
                "admin",
                "admin@example.com",
                "admin123",
                Role::Admin,
                now - Duration::minutes(1),
            )?,
            seed_account(2, "member", "member@example.com", "member123", Role::Member, now)?,
        ];

        Ok(Self {
            accounts,
            next_id: AtomicI64::new(3),
        })
    }
}

impl AccountStore for MemoryAccountStore {
    async fn find_by_username(&self, username: &Username) -> IdentityResult<Option<Account>> {
        Ok(self
            .accounts
            .iter()
            .find(|a| a.username == *username)
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> IdentityResult<Option<Account>> {
        Ok(self.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn exists_by_username_or_email(
        &self,
        username: &Username,
        email: &Email,
    ) -> IdentityResult<bool> {
        Ok(self
            .accounts
            .iter()
            .any(|a| a.username == *username || a.email == *email))
    }

    /// Fabricates the record a durable store would return, then forgets
    /// it. Callers see a normal successful insert.
    async fn insert(&self, account: NewAccount) -> IdentityResult<Account> {
        let now = Utc::now();

        Ok(Account {
            id: AccountId::new(self.next_id.fetch_add(1, Ordering::Relaxed)),
            username: account.username,
            email: account.email,
            password_hash: account.password_hash,
            role: account.role,
            is_active: account.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reports one row touched whatever the id; demo writes are
    /// acknowledged, never applied.
    async fn update_active_status(&self, _id: AccountId, _is_active: bool) -> IdentityResult<u64> {
        Ok(1)
    }

    async fn list_all(&self) -> IdentityResult<Vec<Account>> {
        let mut accounts = self.accounts.clone();
        accounts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(accounts)
    }

    fn mode(&self) -> StoreMode {
        StoreMode::Demo
    }
}

fn seed_account(
    id: i64,
    username: &str,
    email: &str,
    password: &str,
    role: Role,
    created_at: chrono::DateTime<Utc>,
) -> IdentityResult<Account> {
    let encoded = platform::password::hash_password(password)?;

    Ok(Account {
        id: AccountId::new(id),
        username: Username::from_stored(username.to_string()),
        email: Email::from_stored(email.to_string()),
        password_hash: PasswordHash::new(encoded),
        role,
        is_active: true,
        created_at,
        updated_at: created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeds_answer_lookups() {
        let store = MemoryAccountStore::demo().unwrap();

        let admin = store
            .find_by_username(&Username::new("admin").unwrap())
            .await
            .unwrap()
            .expect("admin seed");
        assert_eq!(admin.role, Role::Admin);
        assert!(admin.is_active);
        assert!(admin.verify_password("admin123"));

        let member = store.find_by_id(AccountId::new(2)).await.unwrap().expect("member seed");
        assert_eq!(member.role, Role::Member);

        let missing = store
            .find_by_username(&Username::new("nobody").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryAccountStore::demo().unwrap();

        let accounts = store.list_all().await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].username.as_str(), "member");
        assert_eq!(accounts[1].username.as_str(), "admin");
    }

    #[tokio::test]
    async fn test_insert_acknowledges_without_persisting() {
        let store = MemoryAccountStore::demo().unwrap();

        let username = Username::new("newuser").unwrap();
        let inserted = store
            .insert(NewAccount {
                username: username.clone(),
                email: Email::new("n@x.com").unwrap(),
                password_hash: PasswordHash::new(
                    platform::password::hash_password("abcdef").unwrap(),
                ),
                role: Role::Member,
                is_active: false,
            })
            .await
            .unwrap();

        // The fabricated record looks store-assigned,
        assert_eq!(inserted.id.as_i64(), 3);
        assert!(!inserted.is_active);

        // but nothing was kept.
        assert!(store.find_by_username(&username).await.unwrap().is_none());
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_inserts_get_fresh_ids() {
        let store = MemoryAccountStore::demo().unwrap();

        let hash = PasswordHash::new(platform::password::hash_password("abcdef").unwrap());
        let first = store
            .insert(NewAccount {
                username: Username::new("first").unwrap(),
                email: Email::new("first@x.com").unwrap(),
                password_hash: hash.clone(),
                role: Role::Member,
                is_active: false,
            })
            .await
            .unwrap();
        let second = store
            .insert(NewAccount {
                username: Username::new("second").unwrap(),
                email: Email::new("second@x.com").unwrap(),
                password_hash: hash,
                role: Role::Member,
                is_active: false,
            })
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_update_reports_success() {
        let store = MemoryAccountStore::demo().unwrap();

        assert_eq!(
            store
                .update_active_status(AccountId::new(999), true)
                .await
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_mode_is_demo() {
        let store = MemoryAccountStore::demo().unwrap();
        assert_eq!(store.mode(), StoreMode::Demo);
    }
}
