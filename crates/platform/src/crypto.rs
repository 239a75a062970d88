//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes.
///
/// Errors only when the OS randomness source itself fails, which callers
/// must treat as fatal for the operation at hand.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, rand::Error> {
    let mut bytes = vec![0u8; len];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Generate an opaque random token: `len` random bytes, URL-safe base64
/// without padding. Suitable for bearer-style session tokens.
pub fn random_token(len: usize) -> Result<String, rand::Error> {
    let bytes = random_bytes(len)?;
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(bytes))
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Constant-time comparison to prevent timing attacks.
///
/// Accumulates XOR over every byte; never short-circuits on the first
/// difference.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
