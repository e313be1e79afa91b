//! Constant-time Montgomery ladder and y-coordinate recovery

use crate::ec::curve25519::{
    constants::bit_le, field::FieldElement, params::CurveParams, point::AffinePoint,
    projective::ProjectivePoint,
};
use crate::error::{validate, Error, Result};
use montcrypt_internal::ct_select;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Result of a ladder run
#[derive(Clone, Copy, Debug)]
pub struct LadderOutput {
    /// k·P
    pub result: ProjectivePoint,
    /// (k + 1)·P, kept for y-coordinate recovery
    pub companion: ProjectivePoint,
    /// Number of ladder steps executed
    pub iterations: usize,
}

/// Compute k·P from x(P) with a fixed-length Montgomery ladder.
///
/// `k` is little-endian. Exactly `bits` steps run, from bit `bits − 1`
/// down to bit 0; higher bits of `k` are ignored. The swaps are driven by
/// `subtle` choices and there is no branch on a scalar bit. k = 0 yields the
/// identity (1:0).
pub fn mul_x(
    curve: &CurveParams,
    k: &[u8; 32],
    x: &FieldElement,
    bits: usize,
) -> Result<LadderOutput> {
    validate::parameter(bits <= 256, "bits", "ladder length must not exceed 256")?;

    let mut r0 = ProjectivePoint::identity();
    let mut r1 = ProjectivePoint::from_x(x);
    let mut iterations = 0usize;

    for i in (0..bits).rev() {
        let bit = Choice::from(bit_le(k, i));
        ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
        let (doubled, sum) = ProjectivePoint::ladder_step(curve, &r0, &r1, x);
        r0 = doubled;
        r1 = sum;
        ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
        iterations += 1;
    }

    // x = 0 is the order-2 point, where the differential formulas degenerate.
    // Its multiples alternate between the identity and (0:1).
    let torsion = ProjectivePoint {
        x: FieldElement::zero(),
        z: FieldElement::one(),
    };
    let odd = Choice::from(if bits > 0 { bit_le(k, 0) } else { 0 });
    let on_torsion = x.ct_eq(&FieldElement::zero());
    let torsion_result = ct_select(&ProjectivePoint::identity(), &torsion, odd);
    let torsion_companion = ct_select(&torsion, &ProjectivePoint::identity(), odd);

    Ok(LadderOutput {
        result: ct_select(&r0, &torsion_result, on_torsion),
        companion: ct_select(&r1, &torsion_companion, on_torsion),
        iterations,
    })
}

/// Recover the full point k·P from a ladder run over P.
///
/// Okeya–Sakurai: with Q = k·P and x₁ = x((k + 1)·P),
/// y(Q) = [(x·x_Q + 1)(x + x_Q + 2a) − 2a − (x − x_Q)²·x₁] / 2y.
pub fn recover_y(
    curve: &CurveParams,
    base: &AffinePoint,
    output: &LadderOutput,
) -> Result<AffinePoint> {
    let x_q = match output.result.to_affine_x() {
        Some(x_q) => x_q,
        None => return Ok(AffinePoint::identity()),
    };
    if base.is_identity() {
        return Err(Error::InvalidPoint {
            context: "ladder y-recovery",
        });
    }
    if base.y.is_zero() {
        // order two: Q is P itself
        return Ok(AffinePoint::from_coordinates_unchecked(x_q, FieldElement::zero()));
    }
    let x_1 = match output.companion.to_affine_x() {
        Some(x_1) => x_1,
        // (k + 1)·P = O means Q = −P
        None => return Ok(base.negate()),
    };

    let x = &base.x;
    let two_a = curve.a.add(&curve.a);
    let t1 = x.mul(&x_q).add(&FieldElement::one());
    let t2 = x.add(&x_q).add(&two_a);
    let t3 = x.sub(&x_q).square().mul(&x_1);
    let numerator = t1.mul(&t2).sub(&two_a).sub(&t3);
    let y_q = numerator.mul(&base.y.add(&base.y).invert()?);

    let q = AffinePoint::from_coordinates_unchecked(x_q, y_q);
    if !q.is_on_curve(curve) {
        return Err(Error::InvalidPoint {
            context: "ladder y-recovery",
        });
    }
    Ok(q)
}
