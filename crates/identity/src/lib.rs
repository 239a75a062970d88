//! Identity Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store traits
//! - `application/` - Use cases and application services
//! - `infra/` - Store implementations (Postgres, in-memory demo)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Login with username + password, issuing an opaque session cookie
//! - Self-service signup into a pending state awaiting admin approval
//! - Role-gated account administration (list, create, activate/deactivate)
//! - Zero-configuration demo mode when no database is configured
//!
//! ## Security Model
//! - Passwords hashed with salted, iterated PBKDF2-SHA256
//! - Constant-time hash comparison on verification
//! - Vague login failure messages to prevent username enumeration
//! - Authorization checked before validation on every admin operation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use error::{IdentityError, IdentityResult};
pub use infra::memory::MemoryAccountStore;
pub use infra::postgres::PgAccountStore;
pub use presentation::router::{identity_router, identity_router_with_proxy_auth};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::domain::repository::{AccountStore, StoreMode};
    pub use crate::infra::memory::MemoryAccountStore;
    pub use crate::infra::postgres::PgAccountStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
