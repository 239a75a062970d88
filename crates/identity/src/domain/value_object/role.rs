//! Role Value Object

use std::fmt;

/// Account role.
///
/// Stored in the database as its string code. `member` is the default for
/// self-signup; `admin` unlocks the account-management operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    /// Parse a role code. Returns `None` for anything outside the closed
    /// set, which callers surface as a validation failure.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "member" => Some(Role::Member),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("member"), Some(Role::Member));
        assert_eq!(Role::from_code("admin"), Some(Role::Admin));
    }

    #[test]
    fn test_role_from_code_rejects_unknown() {
        assert_eq!(Role::from_code("superadmin"), None);
        assert_eq!(Role::from_code("Admin"), None);
        assert_eq!(Role::from_code(""), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Member.to_string(), "member");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_checks() {
        assert!(!Role::Member.is_admin());
        assert!(Role::Admin.is_admin());
        assert_eq!(Role::default(), Role::Member);
    }
}
