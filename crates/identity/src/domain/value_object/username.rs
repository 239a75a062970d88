//! Username Value Object
//!
//! Unique login/display name. Deliberately ASCII-only: letters, digits and
//! underscores, 3 to 50 characters. Stored and compared exactly as given.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Minimum username length
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum username length
pub const USERNAME_MAX_LENGTH: usize = 50;

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username.
    ///
    /// Checks length first, then charset, so the caller sees the length
    /// message for inputs failing both.
    pub fn new(raw: &str) -> AppResult<Self> {
        let len = raw.chars().count();
        if len < USERNAME_MIN_LENGTH || len > USERNAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be between {} and {} characters",
                USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH
            )));
        }

        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::bad_request(
                "Username may only contain letters, numbers, and underscores",
            ));
        }

        Ok(Self(raw.to_string()))
    }

    /// Wrap a username read back from the store without re-validating.
    ///
    /// Store contents were validated on the way in; re-validation here
    /// would make previously stored records unreadable if rules ever
    /// tighten.
    pub fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod length_validation {
        use super::*;

        #[test]
        fn test_accepts_boundaries() {
            assert!(Username::new("abc").is_ok());
            assert!(Username::new(&"a".repeat(50)).is_ok());
        }

        #[test]
        fn test_rejects_too_short() {
            assert!(Username::new("ab").is_err());
            assert!(Username::new("").is_err());
        }

        #[test]
        fn test_rejects_too_long() {
            assert!(Username::new(&"a".repeat(51)).is_err());
        }

        #[test]
        fn test_length_message_wins_over_charset() {
            let err = Username::new("a!").unwrap_err();
            assert!(err.message().contains("between"));
        }
    }

    mod charset_validation {
        use super::*;

        #[test]
        fn test_accepts_allowed_characters() {
            assert!(Username::new("alice_99").is_ok());
            assert!(Username::new("ABC_def_123").is_ok());
            assert!(Username::new("___").is_ok());
        }

        #[test]
        fn test_rejects_disallowed_characters() {
            for bad in ["ali ce", "ali-ce", "ali.ce", "alice!", "ålice", "帽子屋さん"] {
                assert!(Username::new(bad).is_err(), "accepted {:?}", bad);
            }
        }

        #[test]
        fn test_rejects_surrounding_whitespace() {
            assert!(Username::new(" alice").is_err());
            assert!(Username::new("alice ").is_err());
        }
    }

    mod display_and_conversions {
        use super::*;

        #[test]
        fn test_preserves_case() {
            let name = Username::new("AliceSmith").unwrap();
            assert_eq!(name.as_str(), "AliceSmith");
            assert_eq!(name.to_string(), "AliceSmith");
        }

        #[test]
        fn test_from_stored_skips_validation() {
            let name = Username::from_stored("x".to_string());
            assert_eq!(name.as_str(), "x");
        }
    }
}
