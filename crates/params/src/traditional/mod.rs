//! Constants for traditional (elliptic-curve) algorithms

pub mod curve25519;
