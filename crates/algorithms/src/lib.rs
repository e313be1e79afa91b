//! Cryptographic primitives for montcrypt
//!
//! This crate provides the Curve25519 engine (field, points, ladder, scalars
//! and key generation) together with thin wrappers over HKDF-SHA256 and
//! HMAC-SHA256 used by the hybrid cipher and key exchange.
//!
//! # Security Features
//!
//! - Secret scalars live in zeroizing buffers
//! - The Montgomery ladder runs a fixed number of steps and swaps with
//!   constant-time selects
//! - Tag comparison is constant-time

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::curve25519;

// KDF implementations
pub mod kdf;
pub use kdf::HkdfSha256;

// MAC implementations
pub mod mac;
pub use mac::{HmacSha256, HMAC_SHA256_TAG_SIZE};
