//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AppState;
pub use middleware::{TRUSTED_ACCOUNT_HEADER, caller_from_trusted_headers};
pub use router::{identity_router, identity_router_with_proxy_auth};
