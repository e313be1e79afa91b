//! Constants for Curve25519 in Montgomery form: y² = x³ + 486662·x² + x over
//! 𝔽ₚ with p = 2²⁵⁵ − 19
//!
//! All multi-byte values are little-endian, 32 bytes wide.

/// Size of a field element or scalar in bytes
pub const CURVE25519_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed point: format byte (0x04) + x + y
pub const CURVE25519_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * CURVE25519_ELEMENT_SIZE;

/// Parameters of a Montgomery curve y² = x³ + a·x² + x (B = 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MontgomeryCurveParams {
    /// Human-readable curve name
    pub name: &'static str,
    /// Field prime p
    pub p: [u8; CURVE25519_ELEMENT_SIZE],
    /// Coefficient a
    pub a: [u8; CURVE25519_ELEMENT_SIZE],
    /// Ladder constant (a + 2) / 4
    pub a24: [u8; CURVE25519_ELEMENT_SIZE],
    /// Prime order n of the base point
    pub n: [u8; CURVE25519_ELEMENT_SIZE],
    /// Base point x-coordinate
    pub g_x: [u8; CURVE25519_ELEMENT_SIZE],
    /// Base point y-coordinate
    pub g_y: [u8; CURVE25519_ELEMENT_SIZE],
    /// Bit length of n; secret scalars are sampled below 2^scalar_bits
    pub scalar_bits: usize,
    /// Number of ladder iterations for every scalar multiplication
    pub ladder_bits: usize,
}

/// Curve25519: p = 2²⁵⁵ − 19, a = 486662, n = 2²⁵² + 27742317777372353535851937790883648493, G.x = 9
pub const CURVE25519: MontgomeryCurveParams = MontgomeryCurveParams {
    name: "Curve25519",
    p: [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ],
    a: [
        0x06, 0x6d, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    a24: [
        0x42, 0xdb, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    n: [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ],
    g_x: [
        0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    g_y: [
        0xd9, 0xd3, 0xce, 0x7e, 0xa2, 0xc5, 0xe9, 0x29, 0xb2, 0x61, 0x7c, 0x6d, 0x7e, 0x4d, 0x3d,
        0x92, 0x4c, 0xd1, 0x48, 0x77, 0x2c, 0xdd, 0x1e, 0xe0, 0xb4, 0x86, 0xa0, 0xb8, 0xa1, 0x19,
        0xae, 0x20,
    ],
    scalar_bits: 253,
    ladder_bits: 256,
};

/// HKDF info label for the XOR hybrid cipher
pub const XOR_HYBRID_INFO: &[u8] = b"montcrypt-xor-v1";

/// HKDF info label for the ECDH key exchange
pub const ECDH_KEM_INFO: &[u8] = b"montcrypt-ecdh-kem";

/// Size of the shared secret produced by the ECDH key exchange
pub const ECDH_KEM_SHARED_SECRET_SIZE: usize = 32;
