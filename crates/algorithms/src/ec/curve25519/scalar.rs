//! Curve25519 scalar arithmetic operations

use crate::ec::curve25519::constants::{
    adc8, bytes_to_limbs_le, limbs_to_bytes_le, sbb8, CURVE25519_SCALAR_SIZE, NLIMBS,
};
use crate::ec::curve25519::params::CurveParams;
use crate::error::{validate, Error, Result};
use montcrypt_common::SecretBuffer;
use subtle::{Choice, ConditionallySelectable};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Curve25519 scalar: an integer in [1, n−1], where
/// n = 2²⁵² + 27742317777372353535851937790883648493.
/// Stored as 32 little-endian bytes and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug, PartialEq, Eq)]
pub struct Scalar(SecretBuffer<CURVE25519_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from little-endian bytes.
    /// Rejects 0 and any value ≥ n; no reduction is applied.
    /// The passed array is wiped.
    pub fn new(curve: &CurveParams, mut data: [u8; CURVE25519_SCALAR_SIZE]) -> Result<Self> {
        let scalar = Self::new_from_ref(curve, &data);
        data.zeroize();
        scalar
    }

    /// Same as [`Scalar::new`], copying from a buffer the caller keeps
    pub fn new_from_ref(curve: &CurveParams, data: &[u8; CURVE25519_SCALAR_SIZE]) -> Result<Self> {
        let limbs = Zeroizing::new(bytes_to_limbs_le(data));
        if limbs.iter().all(|&l| l == 0) {
            return Err(Error::param("Curve25519 Scalar", "Scalar is zero"));
        }
        let (mut diff, borrow) = sbb8(&limbs, &curve.n);
        diff.zeroize();
        if borrow == 0 {
            return Err(Error::param("Curve25519 Scalar", "Scalar ≥ group order"));
        }
        Ok(Scalar(SecretBuffer::new(*data)))
    }

    /// Small scalar from an integer
    pub fn from_u64(curve: &CurveParams, value: u64) -> Result<Self> {
        let mut data = [0u8; CURVE25519_SCALAR_SIZE];
        data[..8].copy_from_slice(&value.to_le_bytes());
        Self::new(curve, data)
    }

    /// Deserialize from a byte slice (with validation)
    pub fn deserialize(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        validate::length("Curve25519 Scalar", bytes.len(), CURVE25519_SCALAR_SIZE)?;
        let mut tmp = Zeroizing::new([0u8; CURVE25519_SCALAR_SIZE]);
        tmp.copy_from_slice(bytes);
        Self::new_from_ref(curve, &tmp)
    }

    /// Little-endian bytes of the scalar
    pub fn as_bytes(&self) -> &[u8; CURVE25519_SCALAR_SIZE] {
        self.0.as_array()
    }

    /// Access the underlying SecretBuffer
    pub fn as_secret_buffer(&self) -> &SecretBuffer<CURVE25519_SCALAR_SIZE> {
        &self.0
    }

    /// Is this scalar zero? Never true for a constructed scalar.
    pub fn is_zero(&self) -> bool {
        self.0.as_ref().iter().all(|&b| b == 0)
    }

    /// Add two scalars mod n. A zero sum is rejected.
    pub fn add_mod_n(&self, curve: &CurveParams, other: &Self) -> Result<Self> {
        let a = bytes_to_limbs_le(self.as_bytes());
        let b = bytes_to_limbs_le(other.as_bytes());
        let r = Self::add_limbs_mod(&a, &b, &curve.n);
        Self::new(curve, limbs_to_bytes_le(&r))
    }

    /// Multiply two scalars mod n (double-and-add over the bits of `other`)
    pub fn mul_mod_n(&self, curve: &CurveParams, other: &Self) -> Result<Self> {
        let a = bytes_to_limbs_le(self.as_bytes());
        let b = other.as_bytes();
        let mut acc = [0u32; NLIMBS];

        for &byte in b.iter().rev() {
            for i in (0..8).rev() {
                acc = Self::add_limbs_mod(&acc, &acc, &curve.n); // Double
                let with_a = Self::add_limbs_mod(&acc, &a, &curve.n); // Add
                let bit = Choice::from((byte >> i) & 1);
                for (acc_limb, sum_limb) in acc.iter_mut().zip(with_a.iter()) {
                    *acc_limb = u32::conditional_select(acc_limb, sum_limb, bit);
                }
            }
        }

        let mut out = limbs_to_bytes_le(&acc);
        acc.zeroize();
        let product = Self::new(curve, out);
        out.zeroize();
        product
    }

    /// (a + b) mod n for a, b < n
    fn add_limbs_mod(a: &[u32; NLIMBS], b: &[u32; NLIMBS], n: &[u32; NLIMBS]) -> [u32; NLIMBS] {
        let (sum, carry) = adc8(a, b);
        let (reduced, borrow) = sbb8(&sum, n);
        let need_reduce = Choice::from(((carry | (borrow ^ 1)) & 1) as u8);
        let mut out = [0u32; NLIMBS];
        for ((o, s), r) in out.iter_mut().zip(sum.iter()).zip(reduced.iter()) {
            *o = u32::conditional_select(s, r, need_reduce);
        }
        out
    }
}
