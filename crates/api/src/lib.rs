//! Public API traits and types for the ecsig library
//!
//! This crate provides the public API surface for the ecsig ecosystem: the
//! error type, the algorithm and curve identifiers shared by every crate, and
//! the capability traits that external cryptographic providers implement.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::KeyPairGenerator;

// Re-export trait modules for direct access
pub use traits::keygen;
