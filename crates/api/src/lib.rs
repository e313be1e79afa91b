//! Public API traits and types for the montcrypt library
//!
//! This crate provides the public API surface for the montcrypt workspace:
//! the shared error type, the scheme traits implemented by the key exchange
//! and hybrid cipher crates, and a zeroizing key container.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::Key;

pub use traits::{Kem, Pke, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, pke, serialize};
