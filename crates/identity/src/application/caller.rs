//! Caller Identity
//!
//! Who is invoking an operation, as established by the transport layer.
//! The core never resolves sessions itself; the presentation layer (or a
//! trusted proxy) attaches a [`Caller`] to requests that carry one.

use crate::domain::value_object::{account_id::AccountId, role::Role};

/// The authenticated principal behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// Account the session belongs to, when known
    pub account_id: Option<AccountId>,
    /// Role asserted for this request
    pub role: Role,
}

impl Caller {
    /// An administrator caller.
    pub fn admin(account_id: AccountId) -> Self {
        Self {
            account_id: Some(account_id),
            role: Role::Admin,
        }
    }

    /// A regular member caller.
    pub fn member(account_id: AccountId) -> Self {
        Self {
            account_id: Some(account_id),
            role: Role::Member,
        }
    }

    /// Whether this caller may use administrator operations.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
