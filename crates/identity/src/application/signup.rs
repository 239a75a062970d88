//! Signup Use Case
//!
//! Self-service account creation. New accounts always start as pending
//! members; an administrator activates them later.

use std::sync::Arc;

use crate::application::ack;
use crate::domain::entity::account::NewAccount;
use crate::domain::repository::AccountStore;
use crate::domain::value_object::{
    email::Email,
    password::{Password, PasswordHash},
    role::Role,
    username::Username,
};
use crate::error::{IdentityError, IdentityResult};

/// Signup input
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Signup output
#[derive(Debug)]
pub struct SignupOutput {
    /// Acknowledgement for the client
    pub message: String,
}

/// Signup use case
pub struct SignupUseCase<S>
where
    S: AccountStore,
{
    store: Arc<S>,
}

impl<S> SignupUseCase<S>
where
    S: AccountStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: SignupInput) -> IdentityResult<SignupOutput> {
        if input.username.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return Err(IdentityError::validation(
                "Username, email and password are required",
            ));
        }

        // First failing rule wins; the order is fixed.
        let username = Username::new(&input.username)?;
        let password = Password::new(input.password)?;
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

        // Role and activation are fixed here: self-signup can never grant
        // privilege or skip approval, whatever the request claims.
        let account = self
            .store
            .insert(NewAccount {
                username,
                email,
                password_hash: PasswordHash::new(encoded),
                role: Role::Member,
                is_active: false,
            })
            .await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "Membership request submitted"
        );

        Ok(SignupOutput {
            message: ack(
                "Membership request submitted. Your account is pending administrator approval.",
                self.store.mode(),
            ),
        })
    }
}
