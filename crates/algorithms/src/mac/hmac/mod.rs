//! HMAC-SHA256 (RFC 2104)

use crate::error::{validate, Error, Result};
use hmac::{Hmac, Mac};
use montcrypt_internal::ct_eq;
use montcrypt_params::utils::hash::SHA256_OUTPUT_SIZE;
use sha2::Sha256;

/// Size of an HMAC-SHA256 tag in bytes
pub const HMAC_SHA256_TAG_SIZE: usize = SHA256_OUTPUT_SIZE;

/// HMAC instantiated with SHA-256
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl HmacSha256 {
    /// Compute the tag over the concatenation of `parts`
    pub fn mac(key: &[u8], parts: &[&[u8]]) -> Result<[u8; HMAC_SHA256_TAG_SIZE]> {
        let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key).map_err(|_| Error::Processing {
            operation: "HMAC-SHA256",
            details: "key rejected",
        })?;
        for part in parts {
            mac.update(part);
        }
        let mut tag = [0u8; HMAC_SHA256_TAG_SIZE];
        tag.copy_from_slice(&mac.finalize().into_bytes());
        Ok(tag)
    }

    /// Recompute the tag and compare it with `tag` in constant time
    pub fn verify(key: &[u8], parts: &[&[u8]], tag: &[u8]) -> Result<()> {
        validate::length("HMAC-SHA256 tag", tag.len(), HMAC_SHA256_TAG_SIZE)?;
        let expected = Self::mac(key, parts)?;
        validate::authentication(ct_eq(expected, tag), "HMAC-SHA256")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231, test case 2
    #[test]
    fn test_hmac_sha256_rfc4231_case2() {
        let tag = HmacSha256::mac(b"Jefe", &[&b"what do ya want "[..], &b"for nothing?"[..]]).unwrap();
        assert_eq!(
            hex::encode(tag),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_verify_detects_tampering() {
        let tag = HmacSha256::mac(b"key", &[&b"c1"[..], &b"c2"[..]]).unwrap();
        assert!(HmacSha256::verify(b"key", &[&b"c1"[..], &b"c2"[..]], &tag).is_ok());
        assert!(HmacSha256::verify(b"key", &[&b"c1c2"[..]], &tag).is_ok());

        let mut bad = tag;
        bad[0] ^= 1;
        assert!(matches!(
            HmacSha256::verify(b"key", &[&b"c1"[..], &b"c2"[..]], &bad),
            Err(Error::Authentication { .. })
        ));
        assert!(HmacSha256::verify(b"key", &[&b"c1"[..]], &tag[..16]).is_err());
    }
}
