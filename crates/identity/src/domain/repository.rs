//! Store Traits
//!
//! Interfaces for account persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::value_object::{account_id::AccountId, email::Email, username::Username};
use crate::error::IdentityResult;

/// Which kind of backend is answering.
///
/// Use cases append a notice to their acknowledgement messages when the
/// backend is [`StoreMode::Demo`], because demo writes are not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Writes survive a restart (Postgres).
    Durable,
    /// In-memory fallback; writes are acknowledged but discarded.
    Demo,
}

/// Account store trait
#[trait_variant::make(AccountStore: Send)]
pub trait LocalAccountStore {
    /// Find an account by username
    async fn find_by_username(&self, username: &Username) -> IdentityResult<Option<Account>>;

    /// Find an account by its identifier
    async fn find_by_id(&self, id: AccountId) -> IdentityResult<Option<Account>>;

    /// Check whether the username or the email is already taken
    async fn exists_by_username_or_email(
        &self,
        username: &Username,
        email: &Email,
    ) -> IdentityResult<bool>;

    /// Insert a new account and return it with store-assigned fields
    async fn insert(&self, account: NewAccount) -> IdentityResult<Account>;

    /// Flip the active flag; returns the number of rows touched
    async fn update_active_status(&self, id: AccountId, is_active: bool) -> IdentityResult<u64>;

    /// All accounts, newest first
    async fn list_all(&self) -> IdentityResult<Vec<Account>>;

    /// Which kind of backend this is
    fn mode(&self) -> StoreMode;
}
