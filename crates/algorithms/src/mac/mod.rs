//! Message authentication codes

pub mod hmac;

pub use self::hmac::{HmacSha256, HMAC_SHA256_TAG_SIZE};
