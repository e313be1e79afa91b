//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Largest HKDF-SHA256 output: 255 blocks of the hash output
pub const HKDF_SHA256_MAX_OUTPUT: usize = 255 * SHA256_OUTPUT_SIZE;
