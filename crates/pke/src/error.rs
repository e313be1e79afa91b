//! Error handling for PKE operations.

use core::fmt;
use montcrypt_algorithms::error::Error as PrimitiveError;
use montcrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error from the curve or KDF/MAC primitives
    Primitive(PrimitiveError),
    /// Error raised through the public API types
    Api(CoreError),
    /// Ciphertext bytes do not parse
    InvalidCiphertextFormat(&'static str),
    /// Encryption was refused, e.g. for an unusable recipient key
    EncryptionFailed(&'static str),
    /// The recipient could not reproduce the sender's key material
    DecryptionFailed(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid PKE ciphertext format: {}", reason)
            }
            Error::EncryptionFailed(reason) => write!(f, "PKE encryption failed: {}", reason),
            Error::DecryptionFailed(reason) => write!(f, "PKE decryption failed: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::Authentication { .. } => {
                Error::DecryptionFailed("authentication tag mismatch")
            }
            other => Error::Primitive(other),
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidCiphertextFormat(reason) => CoreError::InvalidCiphertext {
                context: "Curve25519 hybrid",
                message: reason.to_string(),
            },
            Error::EncryptionFailed(reason) => CoreError::Other {
                context: "Curve25519 hybrid encryption",
                message: reason.to_string(),
            },
            Error::DecryptionFailed(reason) => CoreError::DecryptionMismatch {
                context: "Curve25519 hybrid decryption",
                message: reason.to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use montcrypt_api::error::ErrorKind;

    #[test]
    fn test_authentication_becomes_decryption_failure() {
        let err = Error::from(PrimitiveError::Authentication {
            algorithm: "HMAC-SHA256",
        });
        assert_eq!(err, Error::DecryptionFailed("authentication tag mismatch"));
        assert_eq!(CoreError::from(err).kind(), ErrorKind::DecryptionMismatch);
    }

    #[test]
    fn test_taxonomy_survives_conversion() {
        let cases = [
            (PrimitiveError::EncodingExhausted { attempts: 100 }, ErrorKind::EncodingExhausted),
            (PrimitiveError::InvalidPoint { context: "c1" }, ErrorKind::InvalidPoint),
            (PrimitiveError::EntropyUnavailable { context: "rng" }, ErrorKind::EntropyUnavailable),
            (PrimitiveError::NoInverse { context: "z" }, ErrorKind::NoInverse),
        ];
        for (primitive, kind) in cases {
            assert_eq!(CoreError::from(Error::from(primitive)).kind(), kind);
        }
    }

    #[test]
    fn test_format_errors() {
        let err: CoreError = Error::InvalidCiphertextFormat("truncated").into();
        assert_eq!(err.kind(), ErrorKind::InvalidCiphertext);
        assert_eq!(
            Error::DecryptionFailed("bad tag").to_string(),
            "PKE decryption failed: bad tag"
        );
    }
}
