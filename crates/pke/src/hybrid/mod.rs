//! Hybrid ECDH encryption over Curve25519
//!
//! Two variants share the message codec:
//! - [`xor`] masks the x-coordinate of the message point with HKDF output
//!   and authenticates it with HMAC-SHA256,
//! - [`additive`] adds e·Q to the message point.
//!
//! [`XorHybrid`] wraps the XOR variant as a byte-oriented [`Pke`] scheme:
//! the plaintext is chunk-encoded and every block is encrypted under its own
//! ephemeral key. The serialized ciphertext is
//! `block count (u32, big-endian) ‖ final block length (u8) ‖ 96-byte block ‖ …`.
//! The codec drops trailing zero bytes of a block, so the recorded final
//! length is used to restore them on decryption.

pub mod additive;
pub mod xor;

pub use additive::{AdditiveCiphertext, ADDITIVE_CIPHERTEXT_SIZE};
pub use xor::{XorCiphertext, XOR_CIPHERTEXT_SIZE};

use crate::codec::{self, CodecConfig};
use crate::error::{Error as PkeError, Result};
use log::debug;
use montcrypt_algorithms::curve25519::{
    self as ec, CurveParams, FieldElement, CURVE25519_FIELD_ELEMENT_SIZE, CURVE25519_SCALAR_SIZE,
};
use montcrypt_algorithms::error::Error as PrimitiveError;
use montcrypt_api::{error::Error as ApiError, Pke, Result as ApiResult, Serialize, SerializeSecret};
use montcrypt_common::SecretBuffer;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const ALGORITHM: &str = "Curve25519-XOR-HKDF-SHA256-HMAC-SHA256";

/// Size of the big-endian block count that prefixes a serialized message
pub const BLOCK_COUNT_SIZE: usize = 4;

/// Size of the header: block count followed by the final block length
pub const HEADER_SIZE: usize = BLOCK_COUNT_SIZE + 1;

/// Public key: x(d·G), 32 bytes little-endian
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorHybridPublicKey([u8; CURVE25519_FIELD_ELEMENT_SIZE]);

impl AsRef<[u8]> for XorHybridPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Secret key: the scalar d
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XorHybridSecretKey(SecretBuffer<CURVE25519_SCALAR_SIZE>);

impl AsRef<[u8]> for XorHybridSecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

/// Canonical, on-curve and not the order-2 x = 0
fn parse_public_x(curve: &CurveParams, bytes: &[u8]) -> Result<FieldElement> {
    if bytes.len() != CURVE25519_FIELD_ELEMENT_SIZE {
        return Err(ApiError::InvalidLength {
            context: "Curve25519 hybrid public key",
            expected: CURVE25519_FIELD_ELEMENT_SIZE,
            actual: bytes.len(),
        }
        .into());
    }
    let mut buf = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
    buf.copy_from_slice(bytes);
    let x = FieldElement::from_bytes(&buf)?;
    if x.is_zero() {
        return Err(PrimitiveError::InvalidPoint {
            context: "Curve25519 hybrid public key",
        }
        .into());
    }
    ec::validate_x(curve, &x)?;
    Ok(x)
}

impl Serialize for XorHybridPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let curve = CurveParams::curve25519();
        let x = parse_public_x(&curve, bytes).map_err(ApiError::from)?;
        Ok(Self(x.to_bytes()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl SerializeSecret for XorHybridSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let curve = CurveParams::curve25519();
        let scalar = ec::Scalar::deserialize(&curve, bytes).map_err(|e| {
            ApiError::from(PkeError::from(e)).with_context("Curve25519 hybrid secret key")
        })?;
        Ok(Self(scalar.as_secret_buffer().clone()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

/// Associated data of one block: caller aad ‖ index ‖ count ‖ final length
fn block_aad(aad: &[u8], index: u32, count: u32, last_len: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(aad.len() + 2 * BLOCK_COUNT_SIZE + 1);
    out.extend_from_slice(aad);
    out.extend_from_slice(&index.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());
    out.push(last_len);
    out
}

/// Encrypt `plaintext` block by block with an explicit codec configuration
pub fn encrypt_message<R: CryptoRng + RngCore>(
    curve: &CurveParams,
    config: &CodecConfig,
    recipient_x: &FieldElement,
    plaintext: &[u8],
    aad: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    let points = codec::encode_message(curve, config, plaintext)?;
    let count = u32::try_from(points.len())
        .map_err(|_| PkeError::EncryptionFailed("message has too many blocks"))?;
    let last_len = match plaintext.len() % config.max_block_bytes() {
        0 if !plaintext.is_empty() => config.max_block_bytes(),
        rem => rem,
    };
    let last_len = u8::try_from(last_len)
        .map_err(|_| PkeError::EncryptionFailed("block length does not fit the header"))?;

    let mut out = Vec::with_capacity(HEADER_SIZE + points.len() * XOR_CIPHERTEXT_SIZE);
    out.extend_from_slice(&count.to_be_bytes());
    out.push(last_len);
    for (index, point) in (0u32..).zip(points.iter()) {
        let block = xor::encrypt(
            curve,
            recipient_x,
            &point.x(),
            &block_aad(aad, index, count, last_len),
            rng,
        )?;
        out.extend_from_slice(&block.to_bytes());
    }
    debug!(
        "{}: encrypted {} bytes in {} block(s)",
        ALGORITHM,
        plaintext.len(),
        count
    );
    Ok(out)
}

/// Inverse of [`encrypt_message`]
pub fn decrypt_message(
    curve: &CurveParams,
    config: &CodecConfig,
    secret: &ec::Scalar,
    ciphertext: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>> {
    if ciphertext.len() < HEADER_SIZE {
        return Err(PkeError::InvalidCiphertextFormat("missing header"));
    }
    let (header, body) = ciphertext.split_at(HEADER_SIZE);
    let mut count_bytes = [0u8; BLOCK_COUNT_SIZE];
    count_bytes.copy_from_slice(&header[..BLOCK_COUNT_SIZE]);
    let count = u32::from_be_bytes(count_bytes);
    let last_len = header[BLOCK_COUNT_SIZE];

    if count == 0 {
        return Err(PkeError::InvalidCiphertextFormat("zero blocks"));
    }
    let block_len = config.max_block_bytes();
    if usize::from(last_len) > block_len {
        return Err(PkeError::InvalidCiphertextFormat(
            "final block length exceeds the block size",
        ));
    }
    let expected = (count as usize).checked_mul(XOR_CIPHERTEXT_SIZE);
    if expected != Some(body.len()) {
        return Err(PkeError::InvalidCiphertextFormat(
            "length does not match block count",
        ));
    }

    let xs = (0u32..)
        .zip(body.chunks_exact(XOR_CIPHERTEXT_SIZE))
        .map(|(index, chunk)| {
            let block = XorCiphertext::from_bytes(chunk)?;
            xor::decrypt(curve, secret, &block, &block_aad(aad, index, count, last_len))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut plaintext = codec::decode_message(config, &xs)?;
    let expected_len = (count as usize - 1) * block_len + usize::from(last_len);
    if plaintext.len() > expected_len {
        return Err(PkeError::DecryptionFailed(
            "final block is longer than its recorded length",
        ));
    }
    plaintext.resize(expected_len, 0);
    debug!("{}: decrypted {} block(s)", ALGORITHM, count);
    Ok(plaintext)
}

/// Byte-oriented XOR hybrid with the default codec configuration
pub struct XorHybrid;

impl Pke for XorHybrid {
    type PublicKey = XorHybridPublicKey;
    type SecretKey = XorHybridSecretKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        ALGORITHM
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let curve = CurveParams::curve25519();
        let keypair = ec::generate_keypair(&curve, rng)
            .map_err(|e| ApiError::from(PkeError::from(e)))?;
        Ok((
            XorHybridPublicKey(keypair.public.x().to_bytes()),
            XorHybridSecretKey(keypair.secret.as_secret_buffer().clone()),
        ))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        let curve = CurveParams::curve25519();
        let recipient_x = parse_public_x(&curve, &pk_recipient.0).map_err(ApiError::from)?;
        encrypt_message(
            &curve,
            &CodecConfig::default(),
            &recipient_x,
            plaintext,
            aad.unwrap_or_default(),
            rng,
        )
        .map_err(ApiError::from)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        aad: Option<&[u8]>,
    ) -> ApiResult<Vec<u8>> {
        let curve = CurveParams::curve25519();
        let secret = ec::Scalar::new(&curve, *sk_recipient.0.as_array())
            .map_err(|e| ApiError::from(PkeError::from(e)))?;
        decrypt_message(
            &curve,
            &CodecConfig::default(),
            &secret,
            ciphertext,
            aad.unwrap_or_default(),
        )
        .map_err(ApiError::from)
    }
}
