//! Password Value Objects
//!
//! Two wrappers around the platform hashing primitives:
//! - [`Password`]: cleartext input that passed the signup/create policy.
//!   Zeroized on drop, redacted Debug, no Clone.
//! - [`PasswordHash`]: the stored opaque blob. Never leaves the core.
//!
//! Login deliberately does not construct [`Password`]: the policy applies
//! when accounts are created, not when credentials are checked.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum password length for newly created accounts
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum password length for newly created accounts
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Policy-checked cleartext password
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    /// Validate a candidate password against the creation policy.
    pub fn new(raw: String) -> AppResult<Self> {
        let len = raw.chars().count();
        if len < PASSWORD_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "Password must be at least {} characters",
                PASSWORD_MIN_LENGTH
            ))
            .with_action("Choose a longer password"));
        }
        if len > PASSWORD_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Password must be at most {} characters",
                PASSWORD_MAX_LENGTH
            )));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// Stored password hash: `base64(salt ‖ derivedKey)`
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded blob from the hasher or the store.
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    /// Constant-time verification against a cleartext candidate.
    ///
    /// A malformed blob verifies as `false`, indistinguishable from a
    /// wrong password.
    pub fn verify(&self, candidate: &str) -> bool {
        platform::password::verify_password(candidate, &self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod policy {
        use super::*;

        #[test]
        fn test_accepts_minimum_length() {
            assert!(Password::new("abcdef".to_string()).is_ok());
        }

        #[test]
        fn test_rejects_short_and_empty() {
            assert!(Password::new("abcde".to_string()).is_err());
            assert!(Password::new(String::new()).is_err());
        }

        #[test]
        fn test_rejects_overlong() {
            assert!(Password::new("a".repeat(129)).is_err());
            assert!(Password::new("a".repeat(128)).is_ok());
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            // Six characters, more than six bytes.
            assert!(Password::new("łóżkoó".to_string()).is_ok());
        }
    }

    mod redaction {
        use super::*;

        #[test]
        fn test_password_debug_is_redacted() {
            let password = Password::new("supersecret".to_string()).unwrap();
            let debug = format!("{:?}", password);
            assert!(!debug.contains("supersecret"));
            assert!(debug.contains("REDACTED"));
        }

        #[test]
        fn test_hash_debug_is_redacted() {
            let hash = PasswordHash::new("c2FsdHNhbHRzYWx0c2FsdA==".to_string());
            let debug = format!("{:?}", hash);
            assert!(!debug.contains("c2FsdH"));
        }
    }

    mod verification {
        use super::*;

        #[test]
        fn test_verify_roundtrip() {
            let encoded = platform::password::hash_password("hunter42").unwrap();
            let hash = PasswordHash::new(encoded);
            assert!(hash.verify("hunter42"));
            assert!(!hash.verify("hunter43"));
        }

        #[test]
        fn test_verify_malformed_is_false() {
            let hash = PasswordHash::new("not a blob".to_string());
            assert!(!hash.verify("anything"));
        }
    }
}
