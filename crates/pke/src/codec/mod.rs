//! Message ↔ curve point codec
//!
//! A byte string is read as a little-endian base-256 integer m. Encoding
//! scales it to m·multiplier and walks x = m·multiplier + j for
//! j = 0, 1, …, window − 1 until x³ + a·x² + x is a non-zero square, then
//! lifts x to a point. Decoding divides x by the multiplier and drops the
//! offset j, which is exact as long as `window ≤ multiplier`.
//!
//! Trailing zero bytes of a block do not survive the integer form. The
//! chunked [`encode_message`] / [`decode_message`] pair restores them for
//! every block except the last.

use crate::error::{Error, Result};
use log::{debug, trace};
use montcrypt_algorithms::curve25519::{
    AffinePoint, CurveParams, FieldElement, Legendre, CURVE25519_FIELD_ELEMENT_SIZE,
};
use montcrypt_algorithms::error::{validate, Error as PrimitiveError};

/// Default scale factor applied to the message integer
pub const DEFAULT_MULTIPLIER: u32 = 100;

/// Default number of candidates tried before giving up
pub const DEFAULT_WINDOW: u32 = 100;

/// Field bits usable before x could reach p = 2²⁵⁵ − 19
const USABLE_BITS: u32 = 255;

/// Codec parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Scale factor applied to the message integer
    pub multiplier: u32,
    /// Number of consecutive x candidates tried per block
    pub window: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            multiplier: DEFAULT_MULTIPLIER,
            window: DEFAULT_WINDOW,
        }
    }
}

impl CodecConfig {
    /// Create a validated configuration
    pub fn new(multiplier: u32, window: u32) -> Result<Self> {
        let config = CodecConfig { multiplier, window };
        config.validate()?;
        Ok(config)
    }

    /// Check `1 ≤ window ≤ multiplier`
    pub fn validate(&self) -> Result<()> {
        validate::parameter(self.window >= 1, "window", "must be at least 1")?;
        validate::parameter(
            self.window <= self.multiplier,
            "window",
            "must not exceed the multiplier",
        )?;
        Ok(())
    }

    /// Largest block, in bytes, whose every candidate x stays below p.
    ///
    /// With B bytes and a multiplier of b bits the largest candidate is
    /// below 2^(8B + b) − 2^(8B), so 8B + b ≤ 255 suffices.
    pub fn max_block_bytes(&self) -> usize {
        let multiplier_bits = u32::BITS - self.multiplier.leading_zeros();
        ((USABLE_BITS - multiplier_bits) / 8) as usize
    }
}

/// Read up to 31 bytes as a little-endian integer
fn integer_from_block(block: &[u8]) -> Result<FieldElement> {
    let mut buf = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
    buf[..block.len()].copy_from_slice(block);
    Ok(FieldElement::from_bytes(&buf)?)
}

/// Map one block of at most [`CodecConfig::max_block_bytes`] bytes to a point
pub fn encode(curve: &CurveParams, config: &CodecConfig, block: &[u8]) -> Result<AffinePoint> {
    config.validate()?;
    validate::max_length("message block", block.len(), config.max_block_bytes())?;

    let base = integer_from_block(block)?.mul_small(config.multiplier);
    for offset in 0..config.window {
        let x = base.add(&FieldElement::from_u32(offset));
        if curve.rhs(&x).legendre() == Legendre::Residue {
            trace!("codec: {}-byte block encoded at offset {}", block.len(), offset);
            return Ok(AffinePoint::lift_x(curve, &x)?);
        }
    }

    debug!(
        "codec: no residue among {} candidates for a {}-byte block",
        config.window,
        block.len()
    );
    Err(PrimitiveError::EncodingExhausted {
        attempts: config.window,
    }
    .into())
}

/// Recover the block bytes from an x-coordinate produced by [`encode`]
pub fn decode_x(config: &CodecConfig, x: &FieldElement) -> Result<Vec<u8>> {
    config.validate()?;
    let (m, offset) = x.div_rem_small(config.multiplier)?;
    if offset >= config.window {
        return Err(Error::Primitive(PrimitiveError::Processing {
            operation: "message decoding",
            details: "x lies outside every encoding window",
        }));
    }

    let mut bytes = m.to_bytes().to_vec();
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    Ok(bytes)
}

/// Recover the block bytes from a point produced by [`encode`]
pub fn decode(config: &CodecConfig, point: &AffinePoint) -> Result<Vec<u8>> {
    if point.is_identity() {
        return Err(PrimitiveError::InvalidPoint {
            context: "decoding the identity",
        }
        .into());
    }
    decode_x(config, &point.x())
}

/// Split a message into maximal blocks and encode each one.
///
/// The empty message becomes a single empty block.
pub fn encode_message(
    curve: &CurveParams,
    config: &CodecConfig,
    message: &[u8],
) -> Result<Vec<AffinePoint>> {
    config.validate()?;
    if message.is_empty() {
        return Ok(vec![encode(curve, config, message)?]);
    }
    let points = message
        .chunks(config.max_block_bytes())
        .map(|block| encode(curve, config, block))
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "codec: {} bytes encoded into {} point(s)",
        message.len(),
        points.len()
    );
    Ok(points)
}

/// Inverse of [`encode_message`], given the x-coordinates of its points
pub fn decode_message(config: &CodecConfig, xs: &[FieldElement]) -> Result<Vec<u8>> {
    let block_len = config.max_block_bytes();
    let mut message = Vec::with_capacity(xs.len() * block_len);
    for (i, x) in xs.iter().enumerate() {
        let mut block = decode_x(config, x)?;
        if i + 1 < xs.len() {
            validate::max_length("decoded block", block.len(), block_len)?;
            block.resize(block_len, 0);
        }
        message.extend_from_slice(&block);
    }
    Ok(message)
}
