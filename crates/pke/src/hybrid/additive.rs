//! Additive (ElGamal-style) hybrid over full points
//!
//! C1 = e·G and C2 = M + e·Q. The recipient computes M = C2 − d·C1.
//! There is no integrity tag: a modified C2 decrypts to a different point.

use crate::error::{Error, Result};
use log::trace;
use montcrypt_algorithms::curve25519::{
    self as ec, AffinePoint, CurveParams, Scalar, CURVE25519_POINT_UNCOMPRESSED_SIZE,
};
use montcrypt_algorithms::error::Error as PrimitiveError;
use rand::{CryptoRng, RngCore};

/// Serialized size: two uncompressed points
pub const ADDITIVE_CIPHERTEXT_SIZE: usize = 2 * CURVE25519_POINT_UNCOMPRESSED_SIZE;

/// Ciphertext of the additive variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdditiveCiphertext {
    /// Ephemeral public point e·G
    pub c1: AffinePoint,
    /// Masked message point M + e·Q
    pub c2: AffinePoint,
}

impl AdditiveCiphertext {
    /// Serialize as C1 ‖ C2, each 0x04 ‖ x ‖ y
    pub fn to_bytes(&self) -> [u8; ADDITIVE_CIPHERTEXT_SIZE] {
        let mut out = [0u8; ADDITIVE_CIPHERTEXT_SIZE];
        out[..CURVE25519_POINT_UNCOMPRESSED_SIZE].copy_from_slice(&self.c1.serialize_uncompressed());
        out[CURVE25519_POINT_UNCOMPRESSED_SIZE..].copy_from_slice(&self.c2.serialize_uncompressed());
        out
    }

    /// Parse and validate both points
    pub fn from_bytes(curve: &CurveParams, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ADDITIVE_CIPHERTEXT_SIZE {
            return Err(Error::InvalidCiphertextFormat(
                "additive ciphertext must be 130 bytes",
            ));
        }
        let (c1, c2) = bytes.split_at(CURVE25519_POINT_UNCOMPRESSED_SIZE);
        Ok(AdditiveCiphertext {
            c1: AffinePoint::deserialize_uncompressed(curve, c1)?,
            c2: AffinePoint::deserialize_uncompressed(curve, c2)?,
        })
    }
}

fn check_recipient(curve: &CurveParams, recipient: &AffinePoint) -> Result<()> {
    if recipient.is_identity() || !recipient.is_on_curve(curve) {
        return Err(PrimitiveError::InvalidPoint {
            context: "additive hybrid recipient key",
        }
        .into());
    }
    Ok(())
}

/// Encrypt a message point with a fresh ephemeral key
pub fn encrypt<R: CryptoRng + RngCore>(
    curve: &CurveParams,
    recipient: &AffinePoint,
    message: &AffinePoint,
    rng: &mut R,
) -> Result<AdditiveCiphertext> {
    let ephemeral = ec::generate_scalar(curve, rng)?;
    encrypt_with_ephemeral(curve, recipient, message, &ephemeral)
}

/// Encrypt with a caller-supplied ephemeral scalar
pub fn encrypt_with_ephemeral(
    curve: &CurveParams,
    recipient: &AffinePoint,
    message: &AffinePoint,
    ephemeral: &Scalar,
) -> Result<AdditiveCiphertext> {
    check_recipient(curve, recipient)?;
    if !message.is_on_curve(curve) {
        return Err(Error::EncryptionFailed("message point is not on the curve"));
    }

    let shared = ec::scalar_mul_point(curve, ephemeral, recipient)?;
    if shared.is_identity() {
        return Err(PrimitiveError::InvalidPoint {
            context: "additive hybrid shared point is the identity",
        }
        .into());
    }
    let c1 = ec::scalar_mul_point(curve, ephemeral, &curve.base_point())?;
    let c2 = message.add(curve, &shared)?;
    trace!("additive hybrid: C1.x = {:02x?}", c1.x().to_bytes());

    Ok(AdditiveCiphertext { c1, c2 })
}

/// Recover the message point M = C2 − d·C1
pub fn decrypt(
    curve: &CurveParams,
    secret: &Scalar,
    ciphertext: &AdditiveCiphertext,
) -> Result<AffinePoint> {
    if ciphertext.c1.is_identity() || !ciphertext.c1.is_on_curve(curve) {
        return Err(PrimitiveError::InvalidPoint {
            context: "additive hybrid C1",
        }
        .into());
    }
    if !ciphertext.c2.is_on_curve(curve) {
        return Err(PrimitiveError::InvalidPoint {
            context: "additive hybrid C2",
        }
        .into());
    }

    let shared = ec::scalar_mul_point(curve, secret, &ciphertext.c1)?;
    Ok(ciphertext.c2.sub(curve, &shared)?)
}
