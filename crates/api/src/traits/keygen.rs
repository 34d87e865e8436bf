//! Key pair generation trait for ecsig
//!
//! ecsig never creates keys itself. Callers inject a provider that knows how
//! to build a key pair on a named curve from a caller-supplied RNG; the
//! transcoding core stays free of any particular cryptographic backend.

use crate::{EcCurve, EcKeyPair, Result};
use rand::{CryptoRng, RngCore};

/// External provider of elliptic curve key pairs
///
/// # Security Requirements
///
/// Implementations must draw all randomness from the provided RNG and must
/// return a pair on the requested curve.
///
/// # Example Implementation
///
/// ```
/// use ecsig_api::{EcCurve, EcKeyPair, KeyPairGenerator, Result};
/// use rand::{CryptoRng, RngCore};
///
/// struct RandomBytes;
///
/// impl KeyPairGenerator for RandomBytes {
///     fn generate<R: RngCore + CryptoRng>(&self, curve: EcCurve, rng: &mut R) -> Result<EcKeyPair> {
///         let mut secret = vec![0u8; curve.field_size()];
///         rng.fill_bytes(&mut secret);
///         Ok(EcKeyPair::new(curve, vec![0x04], secret))
///     }
/// }
/// ```
pub trait KeyPairGenerator {
    /// Generate a new key pair on `curve` using the provided RNG
    fn generate<R: RngCore + CryptoRng>(&self, curve: EcCurve, rng: &mut R) -> Result<EcKeyPair>;
}

impl<G: KeyPairGenerator + ?Sized> KeyPairGenerator for &G {
    fn generate<R: RngCore + CryptoRng>(&self, curve: EcCurve, rng: &mut R) -> Result<EcKeyPair> {
        (**self).generate(curve, rng)
    }
}
