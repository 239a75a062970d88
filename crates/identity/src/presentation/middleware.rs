//! Identity Middleware
//!
//! Derives the request's [`Caller`] from a trusted reverse proxy. The
//! core never resolves session tokens itself; a fronting proxy validates
//! the cookie and asserts the account id in a header. Only enable this
//! layer when such a proxy is actually in front of the service.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::caller::Caller;
use crate::domain::repository::AccountStore;
use crate::domain::value_object::account_id::AccountId;
use crate::presentation::handlers::AppState;

/// Header a trusted proxy uses to assert the session's account.
pub const TRUSTED_ACCOUNT_HEADER: &str = "x-auth-account-id";

/// Attach a [`Caller`] extension when a trusted proxy asserts one.
///
/// The role is re-derived from the store, never read from a header, so a
/// role change or deactivation takes effect on the next request. Requests
/// without a valid assertion continue anonymously; the role gate in the
/// application layer rejects them.
pub async fn caller_from_trusted_headers<S>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> Response
where
    S: AccountStore + Send + Sync + 'static,
{
    if let Some(caller) = resolve_caller(&state, request.headers()).await {
        request.extensions_mut().insert(caller);
    }

    next.run(request).await
}

async fn resolve_caller<S>(state: &AppState<S>, headers: &HeaderMap) -> Option<Caller>
where
    S: AccountStore + Send + Sync + 'static,
{
    // The assertion rides on a session: no cookie, no caller.
    platform::cookie::extract_cookie(headers, &state.config.session_cookie_name)?;

    let account_id = headers
        .get(TRUSTED_ACCOUNT_HEADER)?
        .to_str()
        .ok()?
        .parse::<i64>()
        .ok()?;

    let account = state
        .store
        .find_by_id(AccountId::new(account_id))
        .await
        .ok()
        .flatten()?;

    if !account.can_login() {
        return None;
    }

    Some(Caller {
        account_id: Some(account.id),
        role: account.role,
    })
}
