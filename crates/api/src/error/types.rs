//! Error type definitions for signature transcoding

use alloc::string::{String, ToString};

/// Primary error type for ecsig operations
///
/// Every variant is non-retryable: the same input fails the same way on every
/// call. Retrying (for example by requesting a fresh signature) is the
/// caller's business.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The algorithm is not one of ES256, ES384 or ES512
    #[error("Unsupported Algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    /// The bytes are not a signature this codec can read or write
    #[error("Invalid ECDSA signature format: {context}: {reason}")]
    InvalidSignatureFormat {
        context: &'static str,
        reason: &'static str,
    },

    /// The injected key pair generator failed
    #[error("Unable to generate Elliptic Curve KeyPair for {curve}: {message}")]
    KeyGeneration {
        curve: &'static str,
        message: String,
    },
}

/// Result type for ecsig operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build an `UnsupportedAlgorithm` error from anything printable
    pub fn unsupported(algorithm: impl ToString) -> Self {
        Self::UnsupportedAlgorithm {
            algorithm: algorithm.to_string(),
        }
    }

    /// Build an `InvalidSignatureFormat` error
    pub const fn invalid_format(context: &'static str, reason: &'static str) -> Self {
        Self::InvalidSignatureFormat { context, reason }
    }

    /// Whether this error stems from malformed signature bytes
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidSignatureFormat { .. })
    }
}
