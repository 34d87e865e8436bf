//! ECDSA signature transcoding
//!
//! This crate converts ECDSA signatures between the ASN.1/DER
//! `SEQUENCE { INTEGER r, INTEGER s }` encoding and the fixed-width
//! big-endian `R || S` concatenation used by JWS (RFC 7518, Section 3.4).
//! It does not sign, verify, or touch randomness apart from handing an RNG
//! to an injected key pair generator.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Emit a `tracing` event when the `trace` feature is enabled
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "trace")]
        {
            tracing::$level!($($arg)+);
        }
    };
}

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::{
    curve_name, signature_byte_array_length, transcode_signature_to_concat,
    transcode_signature_to_der, ConcatSignature, DerSignature,
};

#[cfg(feature = "std")]
pub use traditional::ecdsa::{generate_default_keypair, generate_keypair};
pub use traditional::ecdsa::generate_keypair_with;

// Errors are shared with the API crate
pub use ecsig_api::{Error, Result};
