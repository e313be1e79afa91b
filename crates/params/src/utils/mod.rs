//! Constants for the helper primitives used by the schemes

pub mod hash;
