//! x-only projective arithmetic (X:Z) on the Montgomery curve

use crate::ec::curve25519::{field::FieldElement, params::CurveParams};
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable};

/// Projective Montgomery point (X:Z) with affine x = X/Z.
///
/// Z = 0 is the identity. The y-coordinate is not tracked.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) z: FieldElement,
}

impl ProjectivePoint {
    /// The identity (1:0)
    pub fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Lift an affine x-coordinate to (x:1)
    pub fn from_x(x: &FieldElement) -> Self {
        ProjectivePoint {
            x: *x,
            z: FieldElement::one(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// X coordinate
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// Z coordinate
    pub fn z(&self) -> &FieldElement {
        &self.z
    }

    /// Affine x = X·Z⁻¹, or `None` for the identity
    pub fn to_affine_x(&self) -> Option<FieldElement> {
        self.z.invert().ok().map(|z_inv| self.x.mul(&z_inv))
    }

    /// Do both represent the same affine x? Compares X0·Z1 with X1·Z0.
    pub fn same_x(&self, other: &Self) -> bool {
        self.x.mul(&other.z) == other.x.mul(&self.z)
    }

    /// x-only doubling
    pub fn double(&self, curve: &CurveParams) -> Self {
        if self.z.is_zero() || self.x.is_zero() {
            // identity, or the order-2 point (0, 0)
            return Self::identity();
        }

        let aa = self.x.add(&self.z).square();
        let bb = self.x.sub(&self.z).square();
        let e = aa.sub(&bb);
        ProjectivePoint {
            x: aa.mul(&bb),
            z: e.mul(&bb.add(&curve.a24.mul(&e))),
        }
    }

    /// x-only differential addition: R0 + R1 given x(R1 − R0) = `diff_x`.
    pub fn differential_add(r0: &Self, r1: &Self, diff_x: &FieldElement) -> Result<Self> {
        if r0.is_identity() {
            return Ok(*r1);
        }
        if r1.is_identity() {
            return Ok(*r0);
        }
        if diff_x.is_zero() {
            return Err(Error::InvalidPoint {
                context: "ProjectivePoint::differential_add",
            });
        }
        // Equal x with a non-identity difference means R1 = −R0.
        if r0.same_x(r1) {
            return Ok(Self::identity());
        }

        let da = r1.x.sub(&r1.z).mul(&r0.x.add(&r0.z));
        let cb = r1.x.add(&r1.z).mul(&r0.x.sub(&r0.z));
        Ok(ProjectivePoint {
            x: da.add(&cb).square(),
            z: diff_x.mul(&da.sub(&cb).square()),
        })
    }

    /// Combined ladder step: (R0, R1) → (2·R0, R0 + R1) for x(R1 − R0) = x.
    ///
    /// Straight-line code, no branches on the inputs.
    pub fn ladder_step(curve: &CurveParams, r0: &Self, r1: &Self, x: &FieldElement) -> (Self, Self) {
        let a = r0.x.add(&r0.z);
        let b = r0.x.sub(&r0.z);
        let c = r1.x.add(&r1.z);
        let d = r1.x.sub(&r1.z);

        let aa = a.square();
        let bb = b.square();
        let e = aa.sub(&bb);
        let da = d.mul(&a);
        let cb = c.mul(&b);

        let doubled = ProjectivePoint {
            x: aa.mul(&bb),
            z: e.mul(&bb.add(&curve.a24.mul(&e))),
        };
        let sum = ProjectivePoint {
            x: da.add(&cb).square(),
            z: x.mul(&da.sub(&cb).square()),
        };
        (doubled, sum)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        FieldElement::conditional_swap(&mut a.x, &mut b.x, choice);
        FieldElement::conditional_swap(&mut a.z, &mut b.z, choice);
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => self.same_x(other),
            _ => false,
        }
    }
}
