//! Password Hashing and Verification
//!
//! Salted, iterated password hashing with:
//! - PBKDF2-HMAC-SHA256 key derivation (fixed 100,000 iterations)
//! - Per-password random 16-byte salt
//! - Constant-time verification
//!
//! ## Encoding
//! A hashed password is `base64(salt ‖ derivedKey)`: the 16 salt bytes
//! followed by the 32-byte derived key, standard base64 alphabet. The salt
//! travels inside the blob, so verification needs no external parameters.
//!
//! ## Failure model
//! - [`hash_password`] fails only when the OS randomness source fails.
//! - [`verify_password`] never fails: malformed or truncated blobs verify
//!   as `false`, indistinguishable from a wrong password.

use thiserror::Error;

use crate::crypto;

// ============================================================================
// Constants
// ============================================================================

/// Salt length in bytes, prepended to the derived key inside the blob.
pub const SALT_LENGTH: usize = 16;

/// Derived key length in bytes (256-bit).
pub const DERIVED_KEY_LENGTH: usize = 32;

/// Fixed PBKDF2 iteration count. Changing this invalidates stored hashes,
/// since the blob encodes no parameters.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// The OS randomness source failed while generating a salt
    #[error("failed to generate password salt: {0}")]
    SaltGeneration(#[from] rand::Error),
}

// ============================================================================
// Hashing / Verification
// ============================================================================

/// Hash a password with a fresh random salt.
///
/// Accepts any well-formed string, including the empty string; length
/// policies belong to the callers that accept user input, not here.
/// Repeated calls on the same password produce different blobs (fresh
/// salt every time).
///
/// ## Examples
/// ```rust
/// use platform::password::{hash_password, verify_password};
///
/// let encoded = hash_password("correct horse").unwrap();
/// assert!(verify_password("correct horse", &encoded));
/// assert!(!verify_password("wrong horse", &encoded));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let salt = crypto::random_bytes(SALT_LENGTH)?;
    let key = derive_key(password.as_bytes(), &salt, PBKDF2_ITERATIONS);

    let mut combined = Vec::with_capacity(SALT_LENGTH + DERIVED_KEY_LENGTH);
    combined.extend_from_slice(&salt);
    combined.extend_from_slice(&key);

    Ok(crypto::to_base64(&combined))
}

/// Verify a password against an encoded blob.
///
/// Re-derives the key with the salt extracted from the blob and compares
/// in constant time (XOR accumulation over every byte, no short-circuit).
/// Returns `false` for bad base64, wrong blob length, or a mismatched
/// password; callers cannot tell those cases apart.
pub fn verify_password(password: &str, encoded: &str) -> bool {
    let Ok(combined) = crypto::from_base64(encoded) else {
        return false;
    };
    if combined.len() != SALT_LENGTH + DERIVED_KEY_LENGTH {
        return false;
    }

    let (salt, stored_key) = combined.split_at(SALT_LENGTH);
    let derived = derive_key(password.as_bytes(), salt, PBKDF2_ITERATIONS);

    crypto::constant_time_eq(&derived, stored_key)
}

/// Derive a 256-bit key from a password and salt via PBKDF2-HMAC-SHA256.
pub fn derive_key(password: &[u8], salt: &[u8], rounds: u32) -> [u8; DERIVED_KEY_LENGTH] {
    let mut key = [0u8; DERIVED_KEY_LENGTH];
    pbkdf2::pbkdf2_hmac::<sha2::Sha256>(password, salt, rounds, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    mod derivation {
        use super::*;

        // PBKDF2-HMAC-SHA256 known-answer vectors (password "password",
        // salt "salt", dkLen 32).
        #[test]
        fn test_known_vector_one_round() {
            let key = derive_key(b"password", b"salt", 1);
            let expected =
                hex::decode("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b")
                    .unwrap();
            assert_eq!(key.to_vec(), expected);
        }

        #[test]
        fn test_known_vector_two_rounds() {
            let key = derive_key(b"password", b"salt", 2);
            let expected =
                hex::decode("ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43")
                    .unwrap();
            assert_eq!(key.to_vec(), expected);
        }

        #[test]
        fn test_derivation_is_deterministic() {
            let a = derive_key(b"secret", b"0123456789abcdef", PBKDF2_ITERATIONS);
            let b = derive_key(b"secret", b"0123456789abcdef", PBKDF2_ITERATIONS);
            assert_eq!(a, b);
        }

        #[test]
        fn test_salt_changes_key() {
            let a = derive_key(b"secret", b"0123456789abcdef", 1000);
            let b = derive_key(b"secret", b"fedcba9876543210", 1000);
            assert_ne!(a, b);
        }
    }

    mod hashing {
        use super::*;

        #[test]
        fn test_roundtrip() {
            let encoded = hash_password("hunter42").unwrap();
            assert!(verify_password("hunter42", &encoded));
        }

        #[test]
        fn test_fresh_salt_per_call() {
            let a = hash_password("same password").unwrap();
            let b = hash_password("same password").unwrap();
            assert_ne!(a, b);
            assert!(verify_password("same password", &a));
            assert!(verify_password("same password", &b));
        }

        #[test]
        fn test_blob_shape() {
            let encoded = hash_password("anything").unwrap();
            let decoded = crate::crypto::from_base64(&encoded).unwrap();
            assert_eq!(decoded.len(), SALT_LENGTH + DERIVED_KEY_LENGTH);
        }

        #[test]
        fn test_empty_password_hashes() {
            // Length policy is the caller's job; the primitive accepts "".
            let encoded = hash_password("").unwrap();
            assert!(verify_password("", &encoded));
            assert!(!verify_password("x", &encoded));
        }

        #[test]
        fn test_unicode_password_roundtrip() {
            let encoded = hash_password("pa…łöwórd🔑").unwrap();
            assert!(verify_password("pa…łöwórd🔑", &encoded));
        }
    }

    mod verification {
        use super::*;

        #[test]
        fn test_wrong_password() {
            let encoded = hash_password("correct").unwrap();
            assert!(!verify_password("incorrect", &encoded));
        }

        #[test]
        fn test_malformed_base64_is_false() {
            assert!(!verify_password("secret", "not-base64!!!"));
        }

        #[test]
        fn test_truncated_blob_is_false() {
            let encoded = hash_password("secret").unwrap();
            let truncated = &encoded[..encoded.len() / 2];
            assert!(!verify_password("secret", truncated));
        }

        #[test]
        fn test_wrong_length_blob_is_false() {
            // Valid base64, wrong decoded length.
            let short = crate::crypto::to_base64(&[0u8; 20]);
            assert!(!verify_password("secret", &short));
            let long = crate::crypto::to_base64(&[0u8; 64]);
            assert!(!verify_password("secret", &long));
        }

        #[test]
        fn test_empty_blob_is_false() {
            assert!(!verify_password("secret", ""));
        }
    }
}
