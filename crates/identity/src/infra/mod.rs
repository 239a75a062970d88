//! Infrastructure Layer
//!
//! Store implementations: durable Postgres and the in-memory demo
//! fallback.

pub mod memory;
pub mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;
