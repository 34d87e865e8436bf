//! ECDSA signature encodings for the NIST curves used by JWS
//!
//! This module converts between the DER encoding emitted by general purpose
//! signing APIs and the `R || S` form carried in compact JWS signatures,
//! for ES256 (P-256), ES384 (P-384) and ES512 (P-521).

mod common;
pub mod concat;
pub mod der;
pub mod keypair;
pub mod signature;
pub mod width;

pub use concat::transcode_signature_to_der;
pub use der::transcode_signature_to_concat;
pub use keypair::generate_keypair_with;
#[cfg(feature = "std")]
pub use keypair::{generate_default_keypair, generate_keypair};
pub use signature::{ConcatSignature, DerSignature};
pub use width::{curve_name, signature_byte_array_length};
