//! Identity Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::AccountStore;
use crate::presentation::handlers::{self, AppState};
use crate::presentation::middleware;

/// Create the identity router.
///
/// Admin routes are served but reject every caller until something
/// attaches a [`Caller`](crate::application::Caller) extension upstream.
pub fn identity_router<S>(state: AppState<S>) -> Router
where
    S: AccountStore + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/auth",
            post(handlers::login::<S>).delete(handlers::logout::<S>),
        )
        .route("/signup", post(handlers::signup::<S>))
        .route(
            "/admin/users",
            get(handlers::admin_list_users::<S>)
                .post(handlers::admin_create_user::<S>)
                .patch(handlers::admin_set_active::<S>),
        )
        .with_state(state)
}

/// Identity router that also derives callers from trusted proxy headers.
pub fn identity_router_with_proxy_auth<S>(state: AppState<S>) -> Router
where
    S: AccountStore + Send + Sync + 'static,
{
    identity_router(state.clone()).layer(axum::middleware::from_fn_with_state(
        state,
        middleware::caller_from_trusted_headers::<S>,
    ))
}
