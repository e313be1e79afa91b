//! Message codec and hybrid ECDH encryption over Curve25519
//!
//! - [`codec`] maps byte strings to curve points and back,
//! - [`hybrid::xor`] and [`hybrid::additive`] encrypt encoded points,
//! - [`XorHybrid`] exposes the XOR variant through the `Pke` trait.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
pub mod error;
pub mod hybrid;

// Re-export key items
pub use codec::CodecConfig;
pub use error::{Error, Result};
pub use hybrid::{XorHybrid, XorHybridPublicKey, XorHybridSecretKey};
