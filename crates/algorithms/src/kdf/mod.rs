//! Key derivation functions
//!
//! Only HKDF over SHA-256 is provided; it expands ECDH shared secrets into
//! masking and authentication keys.

pub mod hkdf;

pub use self::hkdf::HkdfSha256;
