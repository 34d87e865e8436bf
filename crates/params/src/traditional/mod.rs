//! Constants for traditional (elliptic curve) signature algorithms

pub mod der;
pub mod ecdsa;
