//! Constant values for ecsig signature transcoding
//!
//! This library provides the curve widths and ASN.1 encoding constants used
//! across the ecsig project.

#![no_std]

// Elliptic curve signature algorithm constants
pub mod traditional;

// Re-export the tables the transcoders reach for most often
pub use traditional::der;
pub use traditional::ecdsa;
