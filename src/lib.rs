//! # montcrypt
//!
//! Curve25519 in Montgomery form: field and point arithmetic, a
//! constant-time Montgomery ladder, key generation, a message-to-point codec
//! and hybrid ECDH encryption.
//!
//! ## Features
//!
//! - `kem` (default): x-only ECDH exposed through the `Kem` trait
//! - `pke` (default): message codec and the XOR/additive hybrid ciphers
//! - `full`: everything
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`montcrypt-api`]: public error type and scheme traits
//! - [`montcrypt-algorithms`]: field, points, ladder, keys, HKDF and HMAC
//! - [`montcrypt-kem`]: ECDH key exchange
//! - [`montcrypt-pke`]: message codec and hybrid encryption

#![forbid(unsafe_code)]

pub use montcrypt_algorithms as algorithms;
pub use montcrypt_api as api;
pub use montcrypt_common as common;
pub use montcrypt_internal as internal;
pub use montcrypt_params as params;

#[cfg(feature = "kem")]
pub use montcrypt_kem as kem;

#[cfg(feature = "pke")]
pub use montcrypt_pke as pke;

/// Common imports for montcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, Pke, Serialize, SerializeSecret};

    // Curve types
    pub use crate::algorithms::curve25519::{AffinePoint, CurveParams, FieldElement, KeyPair, Scalar};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    #[cfg(feature = "kem")]
    pub use crate::kem::EcdhCurve25519;

    #[cfg(feature = "pke")]
    pub use crate::pke::{CodecConfig, XorHybrid};
}
