//! PostgreSQL Store Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::{AccountStore, StoreMode};
use crate::domain::value_object::{
    account_id::AccountId, email::Email, password::PasswordHash, role::Role, username::Username,
};
use crate::error::{IdentityError, IdentityResult};

/// PostgreSQL-backed account store
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountStore for PgAccountStore {
    async fn find_by_username(&self, username: &Username) -> IdentityResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, password_hash, role, is_active, created_at, updated_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_id(&self, id: AccountId) -> IdentityResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, password_hash, role, is_active, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_by_username_or_email(
        &self,
        username: &Username,
        email: &Email,
    ) -> IdentityResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1 OR email = $2)",
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(&self, account: NewAccount) -> IdentityResult<Account> {
        // Unique indexes on username and email are the second line of
        // defense; a violation surfaces as a conflict, not a store fault.
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (username, email, password_hash, role, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, role, is_active, created_at, updated_at
            "#,
        )
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_str())
        .bind(account.role.code())
        .bind(account.is_active)
        .fetch_one(&self.pool)
        .await?;

        row.into_account()
    }

    async fn update_active_status(&self, id: AccountId, is_active: bool) -> IdentityResult<u64> {
        let rows =
            sqlx::query("UPDATE accounts SET is_active = $2, updated_at = now() WHERE id = $1")
                .bind(id.as_i64())
                .bind(is_active)
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(rows)
    }

    async fn list_all(&self) -> IdentityResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, email, password_hash, role, is_active, created_at, updated_at
            FROM accounts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_account()).collect()
    }

    fn mode(&self) -> StoreMode {
        StoreMode::Durable
    }
}

// ============================================================================
// Row Type for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> IdentityResult<Account> {
        let role = Role::from_code(&self.role)
            .ok_or_else(|| IdentityError::Internal(format!("Invalid role code: {}", self.role)))?;

        Ok(Account {
            id: AccountId::new(self.id),
            username: Username::from_stored(self.username),
            email: Email::from_stored(self.email),
            password_hash: PasswordHash::new(self.password_hash),
            role,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
