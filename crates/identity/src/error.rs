//! Identity Error Types
//!
//! This module provides identity-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Input failed validation; the message names the first failing rule
    #[error("{message}")]
    Validation {
        message: String,
        action: Option<String>,
    },

    /// Username or email is already taken
    #[error("Username or email already exists")]
    Conflict,

    /// Unknown username or wrong password; deliberately vague
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Credentials were correct but the account is not yet activated
    #[error("Account is pending administrator approval")]
    PendingApproval,

    /// Caller is not an administrator
    #[error("Administrator privileges required")]
    Forbidden,

    /// No account with the requested ID
    #[error("User not found")]
    UserNotFound,

    /// The store failed; the driver detail stays in the source, the
    /// client only ever sees this message
    #[error("Service temporarily unavailable")]
    Store(#[source] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    /// Validation failure with no suggested remedy.
    pub fn validation(message: impl Into<String>) -> Self {
        IdentityError::Validation {
            message: message.into(),
            action: None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            IdentityError::Validation { .. } => StatusCode::BAD_REQUEST,
            IdentityError::Conflict => StatusCode::CONFLICT,
            IdentityError::InvalidCredentials | IdentityError::PendingApproval => {
                StatusCode::UNAUTHORIZED
            }
            IdentityError::Forbidden => StatusCode::FORBIDDEN,
            IdentityError::UserNotFound => StatusCode::NOT_FOUND,
            IdentityError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            IdentityError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::Validation { .. } => ErrorKind::BadRequest,
            IdentityError::Conflict => ErrorKind::Conflict,
            IdentityError::InvalidCredentials | IdentityError::PendingApproval => {
                ErrorKind::Unauthorized
            }
            IdentityError::Forbidden => ErrorKind::Forbidden,
            IdentityError::UserNotFound => ErrorKind::NotFound,
            IdentityError::Store(_) => ErrorKind::ServiceUnavailable,
            IdentityError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            IdentityError::Validation {
                action: Some(action),
                ..
            } => err.with_action(action.clone()),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            IdentityError::Store(e) => {
                tracing::error!(error = ?e, "Account store error");
            }
            IdentityError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal identity error");
            }
            IdentityError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            IdentityError::Forbidden => {
                tracing::warn!("Admin operation attempted without privileges");
            }
            _ => {
                tracing::debug!(error = %self, "Identity error");
            }
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for IdentityError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => IdentityError::Validation {
                message: err.message().to_string(),
                action: err.action().map(String::from),
            },
            _ => IdentityError::Internal(err.to_string()),
        }
    }
}

/// Unique violations become [`IdentityError::Conflict`]; any other driver
/// failure is a store fault and surfaces generically.
impl From<sqlx::Error> for IdentityError {
    fn from(err: sqlx::Error) -> Self {
        let err = AppError::from(err);
        match err.kind() {
            ErrorKind::Conflict => IdentityError::Conflict,
            ErrorKind::NotFound => IdentityError::UserNotFound,
            _ => IdentityError::Store(err),
        }
    }
}

impl From<platform::password::PasswordHashError> for IdentityError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        IdentityError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for IdentityError {
    fn from(err: tokio::task::JoinError) -> Self {
        IdentityError::Internal(format!("blocking task failed: {err}"))
    }
}
