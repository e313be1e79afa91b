use montcrypt_api::error::{Error as ApiError, ErrorKind};
use thiserror::Error;

/// Everything that can end a CLI run early
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Crypto(#[from] ApiError),

    #[error("recovered message does not match the input")]
    Mismatch,
}

impl From<montcrypt_pke::Error> for CliError {
    fn from(err: montcrypt_pke::Error) -> Self {
        CliError::Crypto(err.into())
    }
}

impl From<montcrypt_algorithms::Error> for CliError {
    fn from(err: montcrypt_algorithms::Error) -> Self {
        CliError::Crypto(err.into())
    }
}

impl CliError {
    /// Process exit status: 1 generic, 3 entropy, 4 encoding,
    /// 5 invalid point, 6 decryption mismatch. Status 2 is left to clap.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => 1,
            CliError::Mismatch => 6,
            CliError::Crypto(e) => match e.kind() {
                ErrorKind::EntropyUnavailable => 3,
                ErrorKind::EncodingExhausted | ErrorKind::InvalidLength => 4,
                ErrorKind::InvalidPoint => 5,
                ErrorKind::DecryptionMismatch => 6,
                _ => 1,
            },
        }
    }
}
