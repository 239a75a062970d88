//! Email Value Object
//!
//! Validates the simple `local@domain.tld` shape. This is deliberately not
//! RFC 5322: one `@`, no whitespace, and a dot-separated domain is all the
//! system ever relied on. Stored and compared exactly as given.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Maximum total length (RFC 5321 path limit)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and wrap an email address.
    pub fn new(raw: &str) -> AppResult<Self> {
        if raw.chars().count() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(raw) {
            return Err(AppError::bad_request("Invalid email address format"));
        }

        Ok(Self(raw.to_string()))
    }

    /// Wrap an email read back from the store without re-validating.
    pub fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    /// Structural shape check: exactly one `@`, non-empty local part, no
    /// whitespace anywhere, and a domain containing an interior dot.
    fn is_valid_format(value: &str) -> bool {
        if value.contains(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return false;
        }

        domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Domain part (after the `@`)
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        for ok in [
            "user@example.com",
            "n@x.com",
            "first.last@sub.example.co.uk",
            "user+tag@example.com",
        ] {
            assert!(Email::new(ok).is_ok(), "rejected {:?}", ok);
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for bad in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@domain",
            "user@@example.com",
            "user@exam@ple.com",
            "user name@example.com",
            "user@exa mple.com",
            "user@.com",
            "user@domain.",
        ] {
            assert!(Email::new(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_rejects_overlong() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(Email::new(&long).is_err());
    }

    #[test]
    fn test_preserved_as_given() {
        let email = Email::new("User.Name@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User.Name@Example.COM");
    }

    #[test]
    fn test_domain_accessor() {
        let email = Email::new("user@mail.example.org").unwrap();
        assert_eq!(email.domain(), "mail.example.org");
    }
}
