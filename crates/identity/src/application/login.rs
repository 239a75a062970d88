//! Login Use Case
//!
//! Authenticates a user and issues a fresh session token.

use std::sync::Arc;
use std::time::Duration;

use crate::application::config::IdentityConfig;
use crate::domain::repository::AccountStore;
use crate::domain::value_object::{
    account_id::AccountId, email::Email, role::Role, username::Username,
};
use crate::error::{IdentityError, IdentityResult};

/// Session tokens are this many random bytes before base64 encoding.
const SESSION_TOKEN_BYTES: usize = 32;

/// Login input
pub struct LoginInput {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

/// Login output: the public subset of the account plus a fresh token.
///
/// The password hash has no field here on purpose; this struct is what
/// crosses back to the transport layer.
#[derive(Debug)]
pub struct LoginOutput {
    /// Opaque session token for the cookie
    pub session_token: String,
    /// How long the transport should honor the token
    pub session_ttl: Duration,
    /// Account ID
    pub account_id: AccountId,
    /// Username
    pub username: Username,
    /// Email
    pub email: Email,
    /// Role
    pub role: Role,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: AccountStore,
{
    store: Arc<S>,
    config: Arc<IdentityConfig>,
}

impl<S> LoginUseCase<S>
where
    S: AccountStore,
{
    pub fn new(store: Arc<S>, config: Arc<IdentityConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: LoginInput) -> IdentityResult<LoginOutput> {
        if input.username.is_empty() || input.password.is_empty() {
            return Err(IdentityError::validation(
                "Username and password are required",
            ));
        }

        // A name that fails parsing cannot be stored, so the outcome is
        // the same vague rejection as an unknown username.
        let username =
            Username::new(&input.username).map_err(|_| IdentityError::InvalidCredentials)?;

        let account = self
            .store
            .find_by_username(&username)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        // Pending accounts are told so before any password work; that an
        // account awaits approval is not a secret.
        if !account.can_login() {
            return Err(IdentityError::PendingApproval);
        }

        // Key derivation is CPU-bound; keep it off the async workers.
        let password = input.password;
        let hash = account.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || hash.verify(&password)).await?;

        if !password_valid {
            return Err(IdentityError::InvalidCredentials);
        }

        let session_token = platform::crypto::random_token(SESSION_TOKEN_BYTES)
            .map_err(|e| IdentityError::Internal(format!("session token generation: {e}")))?;

        tracing::info!(
            account_id = %account.id,
            role = %account.role,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            session_ttl: self.config.session_ttl,
            account_id: account.id,
            username: account.username,
            email: account.email,
            role: account.role,
        })
    }
}
