//! Key Encapsulation Mechanisms (KEM) and Key Exchange
//!
//! This crate exposes Curve25519 Diffie–Hellman through the `Kem` trait: the
//! sender derives a shared secret against the recipient's public
//! x-coordinate and transmits its ephemeral x-coordinate.

pub mod ecdh;
pub mod error;

// Re-exports
pub use ecdh::EcdhCurve25519;
pub use error::{Error, Result};
