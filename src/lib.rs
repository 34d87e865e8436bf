//! # ecsig
//!
//! ECDSA signature transcoding between ASN.1/DER and the JOSE `R || S` form.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecsig = "0.3"
//! ```
//!
//! ```
//! use ecsig::prelude::*;
//!
//! let width = signature_byte_array_length(SignatureAlgorithm::Es256)?;
//! let der = transcode_signature_to_der(&vec![0u8; width])?;
//! assert_eq!(der, [0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00]);
//! assert_eq!(transcode_signature_to_concat(&der, width)?, vec![0u8; width]);
//! # Ok::<(), ecsig::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` support and OS-RNG key generation helpers
//! - `serde`: `Serialize`/`Deserialize` for algorithm and curve identifiers
//! - `trace`: `tracing` events for rejected input and widened output
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecsig-api`]: Error type, identifiers and the key generation trait
//! - [`ecsig-params`]: Curve widths and DER constants
//! - [`ecsig-sign`]: The transcoders and signature types

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ecsig_api as api;
pub use ecsig_params as params;
pub use ecsig_sign as sign;

/// Common imports for ecsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export identifiers and key types
    pub use crate::api::{EcCurve, EcKeyPair, SignatureAlgorithm};

    // Re-export core traits
    pub use crate::api::KeyPairGenerator;

    // Re-export transcoding
    pub use crate::sign::{
        curve_name, generate_keypair_with, signature_byte_array_length,
        transcode_signature_to_concat, transcode_signature_to_der, ConcatSignature, DerSignature,
    };

    #[cfg(feature = "std")]
    pub use crate::sign::{generate_default_keypair, generate_keypair};
}
