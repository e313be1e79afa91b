//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on Curve25519 in Montgomery form. The x-only
//! ladder is the foundation for the key exchange and hybrid encryption
//! crates; full affine points are available for the additive cipher and for
//! reference checks.

pub mod curve25519;

pub use curve25519::{
    AffinePoint as Curve25519Point, CurveParams as Curve25519Params,
    FieldElement as Curve25519FieldElement, Scalar as Curve25519Scalar,
};
