//! Curve25519 in Montgomery form
//!
//! Curve equation: y² = x³ + 486662·x² + x over 𝔽ₚ, where
//! - p = 2²⁵⁵ − 19,
//! - n = 2²⁵² + 27742317777372353535851937790883648493 (order of G),
//! - G.x = 9.
//!
//! Implements:
//! - 8 × 32-bit limb field arithmetic with 2²⁵⁶ ≡ 38 reduction,
//! - affine group law and x-only projective (X:Z) formulas,
//! - a fixed-length constant-time Montgomery ladder with y-recovery,
//! - rejection-sampled key generation and x-only Diffie–Hellman.

mod constants;
mod field;
mod ladder;
mod params;
mod point;
mod projective;
mod scalar;

pub use constants::{
    CURVE25519_FIELD_ELEMENT_SIZE, CURVE25519_POINT_UNCOMPRESSED_SIZE, CURVE25519_SCALAR_SIZE,
};
pub use field::{FieldElement, Legendre};
pub use ladder::{mul_x, recover_y, LadderOutput};
pub use params::CurveParams;
pub use point::AffinePoint;
pub use projective::ProjectivePoint;
pub use scalar::Scalar;

use crate::error::{Error, Result};
use log::{debug, trace};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Upper bound on rejection-sampling rounds in [`generate_scalar`].
///
/// A masked 253-bit candidate lands in [1, n−1] with probability just
/// above 1/2, so running out means the random source is broken.
pub const MAX_KEYGEN_ATTEMPTS: usize = 256;

/// A secret scalar with its public point
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Secret scalar d
    pub secret: Scalar,
    /// Public point d·G
    pub public: AffinePoint,
}

/// Get the standard base point G
pub fn base_point(curve: &CurveParams) -> AffinePoint {
    curve.base_point()
}

/// Check that `x` is the x-coordinate of some curve point
pub fn validate_x(curve: &CurveParams, x: &FieldElement) -> Result<()> {
    if curve.rhs(x).legendre() == Legendre::NonResidue {
        return Err(Error::InvalidPoint {
            context: "x-coordinate not on curve",
        });
    }
    Ok(())
}

/// Sample a secret scalar uniformly from [1, n−1].
///
/// Candidates are `scalar_bits` random bits; out-of-range values are
/// rejected and redrawn. A failing random source is reported as
/// [`Error::EntropyUnavailable`] and never replaced by a weaker one.
pub fn generate_scalar<R: CryptoRng + RngCore>(curve: &CurveParams, rng: &mut R) -> Result<Scalar> {
    let full_bytes = curve.scalar_bits / 8;
    let rem_bits = curve.scalar_bits % 8;

    let mut buf = Zeroizing::new([0u8; CURVE25519_SCALAR_SIZE]);
    for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
        rng.try_fill_bytes(&mut buf[..])
            .map_err(|_| Error::EntropyUnavailable {
                context: "Curve25519 key generation",
            })?;

        if rem_bits == 0 {
            buf[full_bytes..].fill(0);
        } else if full_bytes < CURVE25519_SCALAR_SIZE {
            buf[full_bytes] &= (1u8 << rem_bits) - 1;
            buf[full_bytes + 1..].fill(0);
        }

        if let Ok(scalar) = Scalar::new_from_ref(curve, &buf) {
            trace!("scalar accepted after {} attempt(s)", attempt);
            return Ok(scalar);
        }
    }

    Err(Error::EntropyUnavailable {
        context: "Curve25519 key generation: rejection sampling exhausted",
    })
}

/// Generate a fresh key pair (d, d·G)
pub fn generate_keypair<R: CryptoRng + RngCore>(curve: &CurveParams, rng: &mut R) -> Result<KeyPair> {
    let secret = generate_scalar(curve, rng)?;
    let public = scalar_mul_point(curve, &secret, &curve.base_point())?;
    debug!("generated {} key pair", curve.name);
    Ok(KeyPair { secret, public })
}

/// x-only scalar multiplication k·P over the full ladder length
pub fn scalar_mul_x(curve: &CurveParams, k: &Scalar, x: &FieldElement) -> Result<ProjectivePoint> {
    Ok(mul_x(curve, k.as_bytes(), x, curve.ladder_bits)?.result)
}

/// x(k·G)
pub fn scalar_mul_base_x(curve: &CurveParams, k: &Scalar) -> Result<FieldElement> {
    scalar_mul_x(curve, k, &curve.base_x)?
        .to_affine_x()
        .ok_or(Error::InvalidPoint {
            context: "scalar multiplication of the base point",
        })
}

/// Full-point scalar multiplication: ladder followed by y-recovery
pub fn scalar_mul_point(curve: &CurveParams, k: &Scalar, point: &AffinePoint) -> Result<AffinePoint> {
    if point.is_identity() {
        return Ok(AffinePoint::identity());
    }
    let output = mul_x(curve, k.as_bytes(), &point.x, curve.ladder_bits)?;
    recover_y(curve, point, &output)
}

/// x-only Diffie–Hellman: x(d·Q) for a peer x-coordinate.
///
/// The peer value must lie on the curve and the shared point must not be
/// the identity.
pub fn diffie_hellman(
    curve: &CurveParams,
    secret: &Scalar,
    peer_x: &FieldElement,
) -> Result<FieldElement> {
    validate_x(curve, peer_x)?;
    scalar_mul_x(curve, secret, peer_x)?
        .to_affine_x()
        .ok_or(Error::InvalidPoint {
            context: "Diffie-Hellman result is the identity",
        })
}
