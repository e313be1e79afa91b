//! Constant values for the montcrypt library
//!
//! Everything here is plain data: byte strings and sizes, with no arithmetic.
//! The algorithms crate turns these into field elements.

#![no_std]
#![forbid(unsafe_code)]

pub mod traditional;
pub mod utils;
