//! ECDH-KEM with Curve25519
//!
//! The sender runs x-only Diffie–Hellman against the recipient's public
//! x-coordinate with a fresh ephemeral scalar. The shared x-coordinate is
//! expanded with HKDF-SHA256; the info string binds the ephemeral and the
//! recipient public values.

use crate::error::{validate, Error as KemError};
use log::debug;
use montcrypt_algorithms::curve25519 as ec;
use montcrypt_algorithms::kdf::HkdfSha256;
use montcrypt_api::{
    error::Error as ApiError, Kem, Key as ApiKey, Result as ApiResult, Serialize, SerializeSecret,
};
use montcrypt_common::SecretBuffer;
use montcrypt_params::traditional::curve25519::{ECDH_KEM_INFO, ECDH_KEM_SHARED_SECRET_SIZE};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const ALGORITHM: &str = "ECDH-Curve25519";

/// ECDH KEM with Curve25519
pub struct EcdhCurve25519;

/// Public key for ECDH-Curve25519 KEM (x-coordinate of d·G)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdhCurve25519PublicKey([u8; ec::CURVE25519_FIELD_ELEMENT_SIZE]);

/// Secret key for ECDH-Curve25519 KEM (scalar value)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcdhCurve25519SecretKey(SecretBuffer<{ ec::CURVE25519_SCALAR_SIZE }>);

/// Shared secret from ECDH-Curve25519 KEM
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhCurve25519SharedSecret(ApiKey);

/// Ciphertext for ECDH-Curve25519 KEM (ephemeral x-coordinate)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdhCurve25519Ciphertext([u8; ec::CURVE25519_FIELD_ELEMENT_SIZE]);

impl AsRef<[u8]> for EcdhCurve25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl AsRef<[u8]> for EcdhCurve25519SecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
impl AsRef<[u8]> for EcdhCurve25519SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
impl AsRef<[u8]> for EcdhCurve25519Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Parse a public x-coordinate: canonical, on the curve and not the
/// order-2 point x = 0.
fn parse_x(
    curve: &ec::CurveParams,
    bytes: &[u8],
    what: &'static str,
) -> Result<ec::FieldElement, KemError> {
    validate::key(
        bytes.len() == ec::CURVE25519_FIELD_ELEMENT_SIZE,
        what,
        "must be 32 bytes",
    )?;
    let mut buf = [0u8; ec::CURVE25519_FIELD_ELEMENT_SIZE];
    buf.copy_from_slice(bytes);
    let x = ec::FieldElement::from_bytes(&buf)?;
    validate::key(!x.is_zero(), what, "low-order x-coordinate")?;
    ec::validate_x(curve, &x)?;
    Ok(x)
}

impl Serialize for EcdhCurve25519PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let curve = ec::CurveParams::curve25519();
        let x = parse_x(&curve, bytes, "ECDH-Curve25519 public").map_err(ApiError::from)?;
        Ok(Self(x.to_bytes()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl Serialize for EcdhCurve25519Ciphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let curve = ec::CurveParams::curve25519();
        let x = parse_x(&curve, bytes, "ECDH-Curve25519 ephemeral").map_err(ApiError::from)?;
        Ok(Self(x.to_bytes()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl SerializeSecret for EcdhCurve25519SecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let curve = ec::CurveParams::curve25519();
        let scalar = ec::Scalar::deserialize(&curve, bytes).map_err(|e| {
            ApiError::from(KemError::from(e)).with_context("ECDH-Curve25519 secret key")
        })?;
        Ok(Self(scalar.as_secret_buffer().clone()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

impl SerializeSecret for EcdhCurve25519SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != ECDH_KEM_SHARED_SECRET_SIZE {
            return Err(ApiError::InvalidLength {
                context: "ECDH-Curve25519 shared secret",
                expected: ECDH_KEM_SHARED_SECRET_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(ApiKey::new(bytes)))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

/// HKDF-SHA256 over the shared x with info = label ‖ ephemeral ‖ recipient
fn derive_shared_secret(
    shared_x: &ec::FieldElement,
    ephemeral: &[u8; ec::CURVE25519_FIELD_ELEMENT_SIZE],
    recipient: &[u8; ec::CURVE25519_FIELD_ELEMENT_SIZE],
) -> Result<EcdhCurve25519SharedSecret, KemError> {
    let ikm = Zeroizing::new(shared_x.to_bytes());

    let mut info = Vec::with_capacity(ECDH_KEM_INFO.len() + 2 * ec::CURVE25519_FIELD_ELEMENT_SIZE);
    info.extend_from_slice(ECDH_KEM_INFO);
    info.extend_from_slice(ephemeral);
    info.extend_from_slice(recipient);

    let okm = HkdfSha256::new().derive_array::<ECDH_KEM_SHARED_SECRET_SIZE>(
        &ikm[..],
        None,
        Some(&info[..]),
    )?;
    Ok(EcdhCurve25519SharedSecret(ApiKey::new(&okm[..])))
}

impl Kem for EcdhCurve25519 {
    type PublicKey = EcdhCurve25519PublicKey;
    type SecretKey = EcdhCurve25519SecretKey;
    type SharedSecret = EcdhCurve25519SharedSecret;
    type Ciphertext = EcdhCurve25519Ciphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        ALGORITHM
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let curve = ec::CurveParams::curve25519();
        let sk = ec::generate_scalar(&curve, rng).map_err(|e| ApiError::from(KemError::from(e)))?;
        let pk_x = ec::scalar_mul_base_x(&curve, &sk)
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        debug!("{}: generated key pair", ALGORITHM);
        Ok((
            EcdhCurve25519PublicKey(pk_x.to_bytes()),
            EcdhCurve25519SecretKey(sk.as_secret_buffer().clone()),
        ))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key_recipient: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let curve = ec::CurveParams::curve25519();
        let recipient_x = parse_x(&curve, &public_key_recipient.0, "ECDH-Curve25519 public")
            .map_err(ApiError::from)?;

        let ephemeral = ec::generate_scalar(&curve, rng)
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        let ephemeral_x = ec::scalar_mul_base_x(&curve, &ephemeral)
            .map_err(|e| ApiError::from(KemError::from(e)))?
            .to_bytes();

        let shared_x = ec::diffie_hellman(&curve, &ephemeral, &recipient_x)
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        drop(ephemeral);

        let shared_secret = derive_shared_secret(&shared_x, &ephemeral_x, &public_key_recipient.0)
            .map_err(ApiError::from)?;
        debug!("{}: encapsulated shared secret", ALGORITHM);
        Ok((EcdhCurve25519Ciphertext(ephemeral_x), shared_secret))
    }

    fn decapsulate(
        secret_key_recipient: &Self::SecretKey,
        ciphertext_ephemeral_pk: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let curve = ec::CurveParams::curve25519();
        let sk = ec::Scalar::new(&curve, *secret_key_recipient.0.as_array())
            .map_err(|e| ApiError::from(KemError::from(e)))?;
        let ephemeral_x = parse_x(&curve, &ciphertext_ephemeral_pk.0, "ECDH-Curve25519 ephemeral")
            .map_err(ApiError::from)?;

        let shared_x = ec::diffie_hellman(&curve, &sk, &ephemeral_x).map_err(|e| {
            ApiError::from(KemError::Decapsulation {
                algorithm: ALGORITHM,
                details: match e {
                    montcrypt_algorithms::Error::InvalidPoint { .. } => "shared point is the identity",
                    _ => "ladder failure",
                },
            })
        })?;
        let recipient_x = ec::scalar_mul_base_x(&curve, &sk)
            .map_err(|e| ApiError::from(KemError::from(e)))?
            .to_bytes();

        let shared_secret =
            derive_shared_secret(&shared_x, &ciphertext_ephemeral_pk.0, &recipient_x)
                .map_err(ApiError::from)?;
        debug!("{}: decapsulated shared secret", ALGORITHM);
        Ok(shared_secret)
    }
}

#[cfg(test)]
mod tests;
