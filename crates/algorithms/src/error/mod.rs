//! Error handling for cryptographic primitives

use std::borrow::Cow;
use std::fmt;

use montcrypt_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Authentication failure (MAC tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Processing error during cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Inversion of zero in the field
    NoInverse {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Message-to-point search found no quadratic residue in its window
    EncodingExhausted {
        /// Number of candidates tried
        attempts: u32,
    },

    /// The random source failed to produce bytes
    EntropyUnavailable {
        /// Operation that needed randomness
        context: &'static str,
    },

    /// A point or x-coordinate is not on the curve, or is unusable
    InvalidPoint {
        /// Where the point was rejected
        context: &'static str,
    },

    /// Recomputed key material does not match the ciphertext
    DecryptionMismatch {
        /// Which check failed
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::NoInverse { context } => {
                write!(f, "No multiplicative inverse in {}: operand is zero", context)
            }
            Error::EncodingExhausted { attempts } => {
                write!(f, "No curve point found after {} encoding attempts", attempts)
            }
            Error::EntropyUnavailable { context } => {
                write!(f, "Secure random source unavailable for {}", context)
            }
            Error::InvalidPoint { context } => write!(f, "Invalid curve point in {}", context),
            Error::DecryptionMismatch { context } => {
                write!(f, "Decryption mismatch: {}", context)
            }
        }
    }
}

impl std::error::Error for Error {}

// Conversion to the public API error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "primitive parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Authentication { algorithm } => CoreError::DecryptionMismatch {
                context: algorithm,
                message: "authentication tag mismatch".to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
            Error::NoInverse { context } => CoreError::NoInverse {
                context,
                message: "operand is zero".to_string(),
            },
            Error::EncodingExhausted { attempts } => CoreError::EncodingExhausted {
                context: "message encoding",
                message: format!("no quadratic residue within {} candidates", attempts),
            },
            Error::EntropyUnavailable { context } => CoreError::EntropyUnavailable {
                context,
                message: "secure random source failed".to_string(),
            },
            Error::InvalidPoint { context } => CoreError::InvalidPoint {
                context,
                message: "point failed curve validation".to_string(),
            },
            Error::DecryptionMismatch { context } => CoreError::DecryptionMismatch {
                context,
                message: "recomputed key material does not match".to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
