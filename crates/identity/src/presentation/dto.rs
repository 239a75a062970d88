//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::account::Account;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: SessionUserDto,
}

/// The public subset of an account returned on login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

// ============================================================================
// Acknowledgements
// ============================================================================

/// Generic acknowledgement response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AckResponse {
    pub message: String,
}

// ============================================================================
// Signup
// ============================================================================

/// Signup request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Admin
// ============================================================================

/// Admin create-user request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Admin set-active request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub user_id: i64,
    /// "activate" or "deactivate"
    pub action: String,
}

/// One account in the admin listing. Carries the activation state and
/// creation time on top of the public subset; never the hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.as_i64(),
            username: account.username.into_string(),
            email: account.email.into_string(),
            role: account.role.code().to_string(),
            is_active: account.is_active,
            created_at: account.created_at,
        }
    }
}
