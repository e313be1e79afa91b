//! HKDF-SHA256 (RFC 5869)

use crate::error::{Error, Result};
use hkdf::Hkdf;
use montcrypt_params::utils::hash::HKDF_SHA256_MAX_OUTPUT;
use sha2::Sha256;
use zeroize::Zeroizing;

/// HKDF instantiated with SHA-256
#[derive(Clone, Copy, Debug, Default)]
pub struct HkdfSha256;

impl HkdfSha256 {
    /// Create a new HKDF-SHA256 instance
    pub fn new() -> Self {
        HkdfSha256
    }

    /// Extract-then-expand `length` bytes of key material.
    ///
    /// A missing salt is the all-zero salt of RFC 5869.
    pub fn derive_key(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        if length == 0 || length > HKDF_SHA256_MAX_OUTPUT {
            return Err(Error::Length {
                context: "HKDF-SHA256 output",
                expected: HKDF_SHA256_MAX_OUTPUT,
                actual: length,
            });
        }
        let mut okm = Zeroizing::new(vec![0u8; length]);
        self.expand_into(ikm, salt, info, &mut okm)?;
        Ok(okm)
    }

    /// Derive a fixed-size array of key material
    pub fn derive_array<const N: usize>(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
    ) -> Result<Zeroizing<[u8; N]>> {
        let mut okm = Zeroizing::new([0u8; N]);
        self.expand_into(ikm, salt, info, &mut okm[..])?;
        Ok(okm)
    }

    fn expand_into(
        &self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: Option<&[u8]>,
        out: &mut [u8],
    ) -> Result<()> {
        let hk = Hkdf::<Sha256>::new(salt, ikm);
        hk.expand(info.unwrap_or_default(), out)
            .map_err(|_| Error::Length {
                context: "HKDF-SHA256 output",
                expected: HKDF_SHA256_MAX_OUTPUT,
                actual: out.len(),
            })
    }
}

#[cfg(test)]
mod tests;
