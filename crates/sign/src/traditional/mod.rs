//! Traditional (elliptic curve) signature encodings

pub mod ecdsa;
