//! Curve25519 affine point operations

use crate::ec::curve25519::{
    constants::{bit_le, CURVE25519_FIELD_ELEMENT_SIZE, CURVE25519_POINT_UNCOMPRESSED_SIZE},
    field::{FieldElement, Legendre},
    params::CurveParams,
};
use crate::error::{validate, Error, Result};
use subtle::Choice;

/// Affine coordinates (x, y) or identity
///
/// The identity carries its own flag, so the order-2 point (0, 0) is an
/// ordinary point here.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for AffinePoint {}

impl AffinePoint {
    /// Create a point from coordinates, rejecting anything off the curve
    pub fn new(curve: &CurveParams, x: FieldElement, y: FieldElement) -> Result<Self> {
        if y.square() != curve.rhs(&x) {
            return Err(Error::InvalidPoint {
                context: "AffinePoint::new",
            });
        }
        Ok(Self::from_coordinates_unchecked(x, y))
    }

    pub(crate) fn from_coordinates_unchecked(x: FieldElement, y: FieldElement) -> Self {
        AffinePoint {
            is_identity: Choice::from(0),
            x,
            y,
        }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        AffinePoint {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// x-coordinate (zero for the identity)
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// y-coordinate (zero for the identity)
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Check y² = x³ + a·x² + x. The identity is on every curve.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        self.is_identity() || self.y.square() == curve.rhs(&self.x)
    }

    /// Recover a point from its x-coordinate.
    ///
    /// Of the two candidate y values the even one is returned.
    pub fn lift_x(curve: &CurveParams, x: &FieldElement) -> Result<Self> {
        let rhs = curve.rhs(x);
        if rhs.legendre() == Legendre::NonResidue {
            return Err(Error::InvalidPoint {
                context: "AffinePoint::lift_x",
            });
        }
        let mut y = rhs.sqrt().ok_or(Error::InvalidPoint {
            context: "AffinePoint::lift_x",
        })?;
        if y.is_odd() {
            y = y.negate();
        }
        Ok(Self::from_coordinates_unchecked(*x, y))
    }

    /// −P = (x, −y)
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        Self::from_coordinates_unchecked(self.x, self.y.negate())
    }

    /// Point doubling: 2P
    ///
    /// Slope m = (3x² + 2a·x + 1) / 2y, then x' = m² − a − 2x and
    /// y' = m·(x − x') − y. A point with y = 0 has order two.
    pub fn double(&self, curve: &CurveParams) -> Result<Self> {
        if self.is_identity() || self.y.is_zero() {
            return Ok(Self::identity());
        }

        let x = &self.x;
        let x2 = x.square();
        let numerator = x2
            .mul_small(3)
            .add(&curve.a.mul(x).mul_small(2))
            .add(&FieldElement::one());
        let denominator = self.y.add(&self.y);
        let m = numerator.mul(&denominator.invert()?);

        let x3 = m.square().sub(&curve.a).sub(&x.add(x));
        let y3 = m.mul(&x.sub(&x3)).sub(&self.y);
        Ok(Self::from_coordinates_unchecked(x3, y3))
    }

    /// Point addition: P + Q
    ///
    /// Total over the group: identities pass the other operand through,
    /// P + (−P) is the identity and P + P is routed to [`Self::double`].
    pub fn add(&self, curve: &CurveParams, other: &Self) -> Result<Self> {
        if self.is_identity() {
            return Ok(*other);
        }
        if other.is_identity() {
            return Ok(*self);
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double(curve);
            }
            // same x, different y: Q = −P
            return Ok(Self::identity());
        }

        let m = other
            .y
            .sub(&self.y)
            .mul(&other.x.sub(&self.x).invert()?);
        let x3 = m.square().sub(&curve.a).sub(&self.x).sub(&other.x);
        let y3 = m.mul(&self.x.sub(&x3)).sub(&self.y);
        Ok(Self::from_coordinates_unchecked(x3, y3))
    }

    /// Point subtraction: P − Q
    pub fn sub(&self, curve: &CurveParams, other: &Self) -> Result<Self> {
        self.add(curve, &other.negate())
    }

    /// Variable-time double-and-add over a little-endian integer.
    ///
    /// Reference implementation for tests and public multipliers only;
    /// secret scalars go through the ladder.
    pub fn mul_vartime(&self, curve: &CurveParams, k: &[u8; 32]) -> Result<Self> {
        let mut acc = Self::identity();
        for i in (0..256).rev() {
            acc = acc.double(curve)?;
            if bit_le(k, i) == 1 {
                acc = acc.add(curve, self)?;
            }
        }
        Ok(acc)
    }

    /// Serialize this point as uncompressed: 0x04 ∥ x ∥ y (little-endian
    /// coordinates). The identity is 65 zero bytes.
    pub fn serialize_uncompressed(&self) -> [u8; CURVE25519_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; CURVE25519_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..1 + CURVE25519_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[1 + CURVE25519_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize from uncompressed bytes, or all zeros for the identity
    pub fn deserialize_uncompressed(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        validate::length(
            "Curve25519 Point",
            bytes.len(),
            CURVE25519_POINT_UNCOMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        if bytes[0] != 0x04 {
            return Err(Error::param(
                "Curve25519 Point",
                "Invalid prefix for uncompressed",
            ));
        }
        let mut xb = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..1 + CURVE25519_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[1 + CURVE25519_FIELD_ELEMENT_SIZE..]);

        let x = FieldElement::from_bytes(&xb)?;
        let y = FieldElement::from_bytes(&yb)?;
        Self::new(curve, x, y)
    }
}
