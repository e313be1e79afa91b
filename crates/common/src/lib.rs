//! Common implementations and shared functionality for the montcrypt library
//!
//! This crate holds the secret-handling container shared by the scalar,
//! key exchange and hybrid cipher code.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
