//! Domain Layer
//!
//! Contains entities, value objects, and store traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::{Account, NewAccount};
pub use repository::{AccountStore, StoreMode};
pub use value_object::{
    account_id::AccountId, email::Email, password::Password, password::PasswordHash, role::Role,
    username::Username,
};
