//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (randomness, Base64, constant-time compare)
//! - Password hashing (PBKDF2-HMAC-SHA256, salted and iterated)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
