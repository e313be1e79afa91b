//! XOR/KDF hybrid over x-coordinates
//!
//! C1 = x(e·G), shared = x(e·Q). HKDF-SHA256 with ikm = shared,
//! salt = C1 and info = `XOR_HYBRID_INFO` yields a 32-byte mask followed by
//! a 32-byte MAC key. C2 = M.x ⊕ mask and the tag is
//! HMAC-SHA256(mac_key, C1 ‖ C2 ‖ aad).

use crate::error::{Error, Result};
use log::trace;
use montcrypt_algorithms::curve25519::{
    self as ec, CurveParams, FieldElement, Scalar, CURVE25519_FIELD_ELEMENT_SIZE,
};
use montcrypt_algorithms::kdf::HkdfSha256;
use montcrypt_algorithms::mac::{HmacSha256, HMAC_SHA256_TAG_SIZE};
use montcrypt_internal::constant_time::ct_xor;
use montcrypt_params::traditional::curve25519::XOR_HYBRID_INFO;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Serialized size: C1 ‖ C2 ‖ tag
pub const XOR_CIPHERTEXT_SIZE: usize = 2 * CURVE25519_FIELD_ELEMENT_SIZE + HMAC_SHA256_TAG_SIZE;

const KEY_MATERIAL_SIZE: usize = 2 * CURVE25519_FIELD_ELEMENT_SIZE;

/// One encrypted x-coordinate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorCiphertext {
    /// Ephemeral public x-coordinate
    pub c1: [u8; CURVE25519_FIELD_ELEMENT_SIZE],
    /// Masked message x-coordinate
    pub c2: [u8; CURVE25519_FIELD_ELEMENT_SIZE],
    /// HMAC-SHA256 over C1 ‖ C2 ‖ aad
    pub tag: [u8; HMAC_SHA256_TAG_SIZE],
}

impl XorCiphertext {
    /// Serialize as C1 ‖ C2 ‖ tag
    pub fn to_bytes(&self) -> [u8; XOR_CIPHERTEXT_SIZE] {
        let mut out = [0u8; XOR_CIPHERTEXT_SIZE];
        out[..32].copy_from_slice(&self.c1);
        out[32..64].copy_from_slice(&self.c2);
        out[64..].copy_from_slice(&self.tag);
        out
    }

    /// Parse C1 ‖ C2 ‖ tag. Only the length is checked here.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != XOR_CIPHERTEXT_SIZE {
            return Err(Error::InvalidCiphertextFormat(
                "XOR hybrid block must be 96 bytes",
            ));
        }
        let mut ct = XorCiphertext {
            c1: [0u8; CURVE25519_FIELD_ELEMENT_SIZE],
            c2: [0u8; CURVE25519_FIELD_ELEMENT_SIZE],
            tag: [0u8; HMAC_SHA256_TAG_SIZE],
        };
        ct.c1.copy_from_slice(&bytes[..32]);
        ct.c2.copy_from_slice(&bytes[32..64]);
        ct.tag.copy_from_slice(&bytes[64..]);
        Ok(ct)
    }
}

/// Mask and MAC key, wiped on drop
struct SessionKeys {
    mask: Zeroizing<[u8; CURVE25519_FIELD_ELEMENT_SIZE]>,
    mac_key: Zeroizing<[u8; CURVE25519_FIELD_ELEMENT_SIZE]>,
}

fn derive_keys(
    shared_x: &FieldElement,
    c1: &[u8; CURVE25519_FIELD_ELEMENT_SIZE],
) -> Result<SessionKeys> {
    let ikm = Zeroizing::new(shared_x.to_bytes());
    let okm = HkdfSha256::new().derive_array::<KEY_MATERIAL_SIZE>(
        &ikm[..],
        Some(&c1[..]),
        Some(XOR_HYBRID_INFO),
    )?;

    let mut keys = SessionKeys {
        mask: Zeroizing::new([0u8; CURVE25519_FIELD_ELEMENT_SIZE]),
        mac_key: Zeroizing::new([0u8; CURVE25519_FIELD_ELEMENT_SIZE]),
    };
    keys.mask.copy_from_slice(&okm[..CURVE25519_FIELD_ELEMENT_SIZE]);
    keys.mac_key.copy_from_slice(&okm[CURVE25519_FIELD_ELEMENT_SIZE..]);
    Ok(keys)
}

/// Encrypt `message_x` to the holder of `recipient_x` with a fresh ephemeral key
pub fn encrypt<R: CryptoRng + RngCore>(
    curve: &CurveParams,
    recipient_x: &FieldElement,
    message_x: &FieldElement,
    aad: &[u8],
    rng: &mut R,
) -> Result<XorCiphertext> {
    let ephemeral = ec::generate_scalar(curve, rng)?;
    encrypt_with_ephemeral(curve, recipient_x, message_x, aad, &ephemeral)
}

/// Encrypt with a caller-supplied ephemeral scalar.
///
/// Reusing an ephemeral scalar for two messages to the same recipient
/// reuses the mask.
pub fn encrypt_with_ephemeral(
    curve: &CurveParams,
    recipient_x: &FieldElement,
    message_x: &FieldElement,
    aad: &[u8],
    ephemeral: &Scalar,
) -> Result<XorCiphertext> {
    let shared_x = ec::diffie_hellman(curve, ephemeral, recipient_x)?;
    let c1 = ec::scalar_mul_base_x(curve, ephemeral)?.to_bytes();
    trace!("XOR hybrid: C1 = {:02x?}", c1);

    let keys = derive_keys(&shared_x, &c1)?;
    let c2 = ct_xor(&message_x.to_bytes(), &*keys.mask);
    let tag = HmacSha256::mac(&keys.mac_key[..], &[&c1[..], &c2[..], aad])?;

    Ok(XorCiphertext { c1, c2, tag })
}

/// Recover the message x-coordinate.
///
/// A failed tag check or an unmasked value ≥ p is a decryption failure.
pub fn decrypt(
    curve: &CurveParams,
    secret: &Scalar,
    ciphertext: &XorCiphertext,
    aad: &[u8],
) -> Result<FieldElement> {
    let c1_x = FieldElement::from_bytes(&ciphertext.c1)
        .map_err(|_| Error::InvalidCiphertextFormat("C1 is not a canonical field element"))?;
    let shared_x = ec::diffie_hellman(curve, secret, &c1_x)?;

    let keys = derive_keys(&shared_x, &ciphertext.c1)?;
    HmacSha256::verify(
        &keys.mac_key[..],
        &[&ciphertext.c1[..], &ciphertext.c2[..], aad],
        &ciphertext.tag,
    )?;

    let message_bytes = Zeroizing::new(ct_xor(&ciphertext.c2, &*keys.mask));
    FieldElement::from_bytes(&message_bytes)
        .map_err(|_| Error::DecryptionFailed("recovered x is not a field element"))
}
