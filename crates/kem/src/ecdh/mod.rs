//! ECDH-KEM over Curve25519
//!
//! The key exchange uses the x-only Montgomery ladder. Public keys and
//! ciphertexts are 32-byte little-endian x-coordinates.

pub mod curve25519;

pub use curve25519::{
    EcdhCurve25519, EcdhCurve25519Ciphertext, EcdhCurve25519PublicKey, EcdhCurve25519SecretKey,
    EcdhCurve25519SharedSecret,
};
