//! Shared constants and helper functions for Curve25519 operations

pub use montcrypt_params::traditional::curve25519::{
    CURVE25519_ELEMENT_SIZE, CURVE25519_POINT_UNCOMPRESSED_SIZE,
};

/// Size of a Curve25519 scalar in bytes
pub const CURVE25519_SCALAR_SIZE: usize = CURVE25519_ELEMENT_SIZE;

/// Size of a Curve25519 field element in bytes
pub const CURVE25519_FIELD_ELEMENT_SIZE: usize = CURVE25519_ELEMENT_SIZE;

/// Number of 32-bit limbs in a field element or scalar
pub(crate) const NLIMBS: usize = 8;

/// Little-endian bytes → little-endian limbs
#[inline]
pub(crate) const fn bytes_to_limbs_le(bytes: &[u8; 32]) -> [u32; NLIMBS] {
    let mut limbs = [0u32; NLIMBS];
    let mut i = 0;
    while i < NLIMBS {
        limbs[i] = u32::from_le_bytes([
            bytes[4 * i],
            bytes[4 * i + 1],
            bytes[4 * i + 2],
            bytes[4 * i + 3],
        ]);
        i += 1;
    }
    limbs
}

/// Little-endian limbs → little-endian bytes
#[inline]
pub(crate) fn limbs_to_bytes_le(limbs: &[u32; NLIMBS]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, limb) in out.chunks_exact_mut(4).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    out
}

/// 8-limb addition with carry
#[inline(always)]
pub(crate) fn adc8(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut carry = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64) + (b_limb as u64) + carry;
        *r_limb = tmp as u32;
        carry = tmp >> 32;
    }
    (r, carry as u32)
}

/// 8-limb subtraction with borrow; borrow is 1 iff a < b
#[inline(always)]
pub(crate) fn sbb8(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut borrow = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64).wrapping_sub(b_limb as u64 + borrow);
        *r_limb = tmp as u32;
        borrow = (tmp >> 63) & 1;
    }
    (r, borrow as u32)
}

/// Test bit `i` of a little-endian byte string
#[inline(always)]
pub(crate) fn bit_le(bytes: &[u8; 32], i: usize) -> u8 {
    (bytes[i / 8] >> (i % 8)) & 1
}
