//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::{
    AdminAccountManager, AdminCreateInput, LoginInput, LoginUseCase, SetActiveInput, SignupInput,
    SignupUseCase,
};
use crate::application::caller::Caller;
use crate::domain::repository::AccountStore;
use crate::error::IdentityResult;
use crate::presentation::dto::{
    AccountDto, AckResponse, AdminCreateRequest, LoginRequest, LoginResponse, SessionUserDto,
    SetActiveRequest, SignupRequest,
};

/// Shared state for identity handlers
pub struct AppState<S>
where
    S: AccountStore + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<IdentityConfig>,
}

// Manual impl so the store itself does not have to be Clone.
impl<S> Clone for AppState<S>
where
    S: AccountStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /api/auth
pub async fn login<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<LoginRequest>,
) -> IdentityResult<impl IntoResponse>
where
    S: AccountStore + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.store.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    // The use case decides the token lifetime; the cookie just carries it.
    let mut cookie = state.config.session_cookie();
    cookie.max_age_secs = Some(output.session_ttl.as_secs() as i64);
    let set_cookie = platform::cookie::set_cookie_header(&cookie, &output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, set_cookie)],
        Json(LoginResponse {
            user: SessionUserDto {
                id: output.account_id.as_i64(),
                username: output.username.into_string(),
                email: output.email.into_string(),
                role: output.role.code().to_string(),
            },
        }),
    ))
}

/// DELETE /api/auth
///
/// Logout is stateless here: there is no server-side session to revoke,
/// so clearing the cookie is the whole operation.
pub async fn logout<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: AccountStore + Send + Sync + 'static,
{
    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AckResponse {
            message: "Logged out.".to_string(),
        }),
    )
}

// ============================================================================
// Signup
// ============================================================================

/// POST /api/signup
pub async fn signup<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<SignupRequest>,
) -> IdentityResult<(StatusCode, Json<AckResponse>)>
where
    S: AccountStore + Send + Sync + 'static,
{
    let use_case = SignupUseCase::new(state.store.clone());

    let output = use_case
        .execute(SignupInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AckResponse {
            message: output.message,
        }),
    ))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/users
pub async fn admin_list_users<S>(
    State(state): State<AppState<S>>,
    caller: Option<Extension<Caller>>,
) -> IdentityResult<Json<Vec<AccountDto>>>
where
    S: AccountStore + Send + Sync + 'static,
{
    let manager = AdminAccountManager::new(state.store.clone());

    let accounts = manager.list(caller.as_deref()).await?;

    Ok(Json(accounts.into_iter().map(AccountDto::from).collect()))
}

/// POST /api/admin/users
pub async fn admin_create_user<S>(
    State(state): State<AppState<S>>,
    caller: Option<Extension<Caller>>,
    Json(req): Json<AdminCreateRequest>,
) -> IdentityResult<(StatusCode, Json<AckResponse>)>
where
    S: AccountStore + Send + Sync + 'static,
{
    let manager = AdminAccountManager::new(state.store.clone());

    let output = manager
        .create(
            caller.as_deref(),
            AdminCreateInput {
                username: req.username,
                email: req.email,
                password: req.password,
                role: req.role,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AckResponse {
            message: output.message,
        }),
    ))
}

/// PATCH /api/admin/users
pub async fn admin_set_active<S>(
    State(state): State<AppState<S>>,
    caller: Option<Extension<Caller>>,
    Json(req): Json<SetActiveRequest>,
) -> IdentityResult<Json<AckResponse>>
where
    S: AccountStore + Send + Sync + 'static,
{
    let manager = AdminAccountManager::new(state.store.clone());

    let output = manager
        .set_active(
            caller.as_deref(),
            SetActiveInput {
                user_id: req.user_id,
                action: req.action,
            },
        )
        .await?;

    Ok(Json(AckResponse {
        message: output.message,
    }))
}
