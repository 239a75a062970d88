//! Domain entities

pub mod account;
