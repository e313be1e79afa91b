//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for montcrypt operations
///
/// Every variant carries a static context naming the operation that failed
/// and a free-form message with the details.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Attempted inversion of zero in the field
    #[error("No inverse: {context}: {message}")]
    NoInverse {
        context: &'static str,
        message: String,
    },

    /// The message-to-point search ran out of candidates
    #[error("Encoding exhausted: {context}: {message}")]
    EncodingExhausted {
        context: &'static str,
        message: String,
    },

    /// The secure random source could not be read
    #[error("Entropy unavailable: {context}: {message}")]
    EntropyUnavailable {
        context: &'static str,
        message: String,
    },

    /// A point or x-coordinate failed curve validation
    #[error("Invalid point: {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// The recipient could not reproduce the sender's key material
    #[error("Decryption mismatch: {context}: {message}")]
    DecryptionMismatch {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid ciphertext error
    #[error("Invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Fieldless discriminant of [`Error`], for matching without destructuring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoInverse,
    EncodingExhausted,
    EntropyUnavailable,
    InvalidPoint,
    DecryptionMismatch,
    InvalidKey,
    InvalidCiphertext,
    InvalidLength,
    InvalidParameter,
    Other,
}

/// Result type for montcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The kind of failure, without its payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoInverse { .. } => ErrorKind::NoInverse,
            Self::EncodingExhausted { .. } => ErrorKind::EncodingExhausted,
            Self::EntropyUnavailable { .. } => ErrorKind::EntropyUnavailable,
            Self::InvalidPoint { .. } => ErrorKind::InvalidPoint,
            Self::DecryptionMismatch { .. } => ErrorKind::DecryptionMismatch,
            Self::InvalidKey { .. } => ErrorKind::InvalidKey,
            Self::InvalidCiphertext { .. } => ErrorKind::InvalidCiphertext,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// The static context recorded on this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::NoInverse { context, .. }
            | Self::EncodingExhausted { context, .. }
            | Self::EntropyUnavailable { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::DecryptionMismatch { context, .. }
            | Self::InvalidKey { context, .. }
            | Self::InvalidCiphertext { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::NoInverse { message, .. } => Self::NoInverse { context, message },
            Self::EncodingExhausted { message, .. } => Self::EncodingExhausted { context, message },
            Self::EntropyUnavailable { message, .. } => Self::EntropyUnavailable { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::DecryptionMismatch { message, .. } => Self::DecryptionMismatch { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}
