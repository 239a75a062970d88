//! Admin Account Manager
//!
//! Role-gated account administration: list, create-as-active, and the
//! activate/deactivate transition. Every operation checks the caller's
//! role before anything else, including input validation.

use std::sync::Arc;

use crate::application::ack;
use crate::application::caller::Caller;
use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountStore;
use crate::domain::value_object::{
    account_id::AccountId,
    email::Email,
    password::{Password, PasswordHash},
    role::Role,
    username::Username,
};
use crate::error::{IdentityError, IdentityResult};

/// Admin create input
pub struct AdminCreateInput {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Role code, "member" or "admin"
    pub role: String,
}

/// Admin create output
#[derive(Debug)]
pub struct AdminCreateOutput {
    pub message: String,
}

/// Set-active input
pub struct SetActiveInput {
    pub user_id: i64,
    /// "activate" or "deactivate"
    pub action: String,
}

/// Set-active output
#[derive(Debug)]
pub struct SetActiveOutput {
    pub message: String,
}

/// Admin account manager
pub struct AdminAccountManager<S>
where
    S: AccountStore,
{
    store: Arc<S>,
}

impl<S> AdminAccountManager<S>
where
    S: AccountStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Authorization precedes validation: an anonymous or non-admin
    /// caller learns nothing about what a well-formed request looks like.
    fn authorize(caller: Option<&Caller>) -> IdentityResult<()> {
        match caller {
            Some(caller) if caller.is_admin() => Ok(()),
            _ => Err(IdentityError::Forbidden),
        }
    }

    /// All accounts, newest first.
    pub async fn list(&self, caller: Option<&Caller>) -> IdentityResult<Vec<Account>> {
        Self::authorize(caller)?;
        self.store.list_all().await
    }

    /// Create an account that is active from the start.
    pub async fn create(
        &self,
        caller: Option<&Caller>,
        input: AdminCreateInput,
    ) -> IdentityResult<AdminCreateOutput> {
        Self::authorize(caller)?;

        if input.username.is_empty()
            || input.email.is_empty()
            || input.password.is_empty()
            || input.role.is_empty()
        {
            return Err(IdentityError::validation("All fields are required"));
        }

        // First failing rule wins; the order is fixed.
        let username = Username::new(&input.username)?;
        let password = Password::new(input.password)?;
        let role = Role::from_code(&input.role)
            .ok_or_else(|| IdentityError::validation("Invalid role"))?;
        let email = Email::new(&input.email)?;

        if self
            .store
            .exists_by_username_or_email(&username, &email)
            .await?
        {
            return Err(IdentityError::Conflict);
        }

        // Key derivation is CPU-bound; keep it off the async workers.
        let encoded = tokio::task::spawn_blocking(move || {
            platform::password::hash_password(password.as_str())
        })
        .await??;

        // Admin-created accounts skip the approval queue.
        let account = self
            .store
            .insert(NewAccount {
                username,
                email,
                password_hash: PasswordHash::new(encoded),
                role,
                is_active: true,
            })
            .await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            role = %account.role,
            "Account created by administrator"
        );

        Ok(AdminCreateOutput {
            message: ack("Account created.", self.store.mode()),
        })
    }

    /// Flip an account's active flag.
    pub async fn set_active(
        &self,
        caller: Option<&Caller>,
        input: SetActiveInput,
    ) -> IdentityResult<SetActiveOutput> {
        Self::authorize(caller)?;

        let is_active = match input.action.as_str() {
            "activate" => true,
            "deactivate" => false,
            _ => return Err(IdentityError::validation("Invalid action")),
        };

        let rows = self
            .store
            .update_active_status(AccountId::new(input.user_id), is_active)
            .await?;

        if rows == 0 {
            return Err(IdentityError::UserNotFound);
        }

        tracing::info!(
            account_id = input.user_id,
            is_active,
            "Account active status changed"
        );

        let message = if is_active {
            "User activated."
        } else {
            "User deactivated."
        };

        Ok(SetActiveOutput {
            message: ack(message, self.store.mode()),
        })
    }
}
