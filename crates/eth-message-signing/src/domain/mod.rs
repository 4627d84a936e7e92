//! # Domain Layer
//!
//! Pure cryptographic logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod address;
pub mod entities;
pub mod errors;
pub mod hashing;
pub mod personal;
pub mod signature;
pub mod typed;
