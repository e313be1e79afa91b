//! Internal utilities for the montcrypt library
//!
//! Nothing in here is part of the public API surface; the helpers are shared
//! by the algorithm and scheme crates.

#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_select, ct_swap, ct_xor};
