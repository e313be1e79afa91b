//! Runtime curve configuration
//!
//! [`CurveParams`] is built once from the static byte constants and then
//! handed by reference to every operation that needs a curve constant.

use crate::ec::curve25519::constants::{bytes_to_limbs_le, NLIMBS};
use crate::ec::curve25519::field::FieldElement;
use crate::ec::curve25519::point::AffinePoint;
use crate::error::{validate, Error, Result};
use montcrypt_params::traditional::curve25519::{MontgomeryCurveParams, CURVE25519};

/// Largest ladder length supported by 32-byte scalars
const MAX_LADDER_BITS: usize = 256;

/// Immutable parameters of a Montgomery curve y² = x³ + a·x² + x over 𝔽ₚ
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    pub(crate) name: &'static str,
    pub(crate) a: FieldElement,
    pub(crate) a24: FieldElement,
    pub(crate) n: [u32; NLIMBS],
    pub(crate) n_bytes: [u8; 32],
    pub(crate) base_x: FieldElement,
    pub(crate) base_y: FieldElement,
    pub(crate) scalar_bits: usize,
    pub(crate) ladder_bits: usize,
}

impl CurveParams {
    /// Curve25519 with base point x = 9
    pub fn curve25519() -> Self {
        Self::from_params_unchecked(&CURVE25519)
    }

    /// Build parameters from a constant table, checking that they describe a
    /// usable curve over 𝔽ₚ with p = 2²⁵⁵ − 19.
    pub fn from_params(params: &MontgomeryCurveParams) -> Result<Self> {
        validate::parameter(
            bytes_to_limbs_le(&params.p) == FieldElement::MOD_LIMBS,
            "p",
            "only 2^255 - 19 is supported",
        )?;

        let a = FieldElement::from_bytes(&params.a)?;
        let a24 = FieldElement::from_bytes(&params.a24)?;
        let base_x = FieldElement::from_bytes(&params.g_x)?;
        let base_y = FieldElement::from_bytes(&params.g_y)?;

        validate::parameter(
            a24.mul_small(4) == a.add(&FieldElement::from_u32(2)),
            "a24",
            "must equal (a + 2) / 4",
        )?;
        validate::parameter(
            a.square() != FieldElement::from_u32(4),
            "a",
            "a^2 - 4 must be non-zero",
        )?;
        validate::parameter(
            params.scalar_bits > 0 && params.scalar_bits <= params.ladder_bits,
            "scalar_bits",
            "must be in 1..=ladder_bits",
        )?;
        validate::parameter(
            params.ladder_bits <= MAX_LADDER_BITS,
            "ladder_bits",
            "must not exceed 256",
        )?;
        validate::parameter(
            params.n.iter().any(|&b| b != 0),
            "n",
            "group order must be non-zero",
        )?;

        let curve = Self::from_params_unchecked(params);
        if base_y.square() != curve.rhs(&base_x) {
            return Err(Error::InvalidPoint {
                context: "CurveParams base point",
            });
        }
        Ok(curve)
    }

    fn from_params_unchecked(params: &MontgomeryCurveParams) -> Self {
        CurveParams {
            name: params.name,
            a: FieldElement::from_bytes_unchecked(&params.a),
            a24: FieldElement::from_bytes_unchecked(&params.a24),
            n: bytes_to_limbs_le(&params.n),
            n_bytes: params.n,
            base_x: FieldElement::from_bytes_unchecked(&params.g_x),
            base_y: FieldElement::from_bytes_unchecked(&params.g_y),
            scalar_bits: params.scalar_bits,
            ladder_bits: params.ladder_bits,
        }
    }

    /// Curve name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Coefficient a
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Ladder constant (a + 2) / 4
    pub fn a24(&self) -> &FieldElement {
        &self.a24
    }

    /// Group order n as little-endian bytes
    pub fn order_bytes(&self) -> &[u8; 32] {
        &self.n_bytes
    }

    /// Base point x-coordinate
    pub fn base_x(&self) -> &FieldElement {
        &self.base_x
    }

    /// Base point as an affine point
    pub fn base_point(&self) -> AffinePoint {
        AffinePoint::from_coordinates_unchecked(self.base_x, self.base_y)
    }

    /// Bit length used when sampling secret scalars
    pub fn scalar_bits(&self) -> usize {
        self.scalar_bits
    }

    /// Number of ladder iterations per scalar multiplication
    pub fn ladder_bits(&self) -> usize {
        self.ladder_bits
    }

    /// Right-hand side of the curve equation: x³ + a·x² + x
    pub fn rhs(&self, x: &FieldElement) -> FieldElement {
        x.mul(&x.mul(&x.add(&self.a)).add(&FieldElement::one()))
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::curve25519()
    }
}
