//! Elliptic curve key pair generation through an injected provider
//!
//! ecsig carries no curve arithmetic. These helpers resolve a JWS algorithm
//! to its curve, hand the request to a [`KeyPairGenerator`] and check what
//! comes back.

use alloc::string::ToString;

use ecsig_api::{EcCurve, EcKeyPair, Error, KeyPairGenerator, Result, SignatureAlgorithm};
use rand::{CryptoRng, RngCore};

/// Generate a key pair strong enough for `alg` using `rng`
///
/// # Errors
///
/// - [`Error::UnsupportedAlgorithm`] if `alg` is not ES256, ES384 or ES512.
/// - [`Error::KeyGeneration`] if the generator fails or returns a pair on
///   another curve or with an empty key.
pub fn generate_keypair_with<G, R>(
    generator: &G,
    alg: SignatureAlgorithm,
    rng: &mut R,
) -> Result<EcKeyPair>
where
    G: KeyPairGenerator,
    R: RngCore + CryptoRng,
{
    let curve = EcCurve::try_from(alg)?;

    let pair = generator.generate(curve, rng).map_err(|err| match err {
        Error::KeyGeneration { .. } => err,
        other => Error::KeyGeneration {
            curve: curve.curve_name(),
            message: other.to_string(),
        },
    })?;

    if pair.curve() != curve {
        trace_event!(
            debug,
            requested = curve.curve_name(),
            returned = pair.curve().curve_name(),
            "generator returned a key pair on the wrong curve"
        );
        return Err(Error::KeyGeneration {
            curve: curve.curve_name(),
            message: "generator returned a key pair on another curve".to_string(),
        });
    }
    if pair.public_key().is_empty() || pair.secret_key().is_empty() {
        return Err(Error::KeyGeneration {
            curve: curve.curve_name(),
            message: "generator returned an empty key".to_string(),
        });
    }

    trace_event!(trace, curve = curve.curve_name(), "generated key pair");
    Ok(pair)
}

/// Generate a key pair strong enough for `alg` using the operating system RNG
#[cfg(feature = "std")]
pub fn generate_keypair<G: KeyPairGenerator>(
    generator: &G,
    alg: SignatureAlgorithm,
) -> Result<EcKeyPair> {
    generate_keypair_with(generator, alg, &mut rand::rngs::OsRng)
}

/// Generate a key pair strong enough for ES512, the strongest supported
/// algorithm, using the operating system RNG
#[cfg(feature = "std")]
pub fn generate_default_keypair<G: KeyPairGenerator>(generator: &G) -> Result<EcKeyPair> {
    generate_keypair(generator, SignatureAlgorithm::Es512)
}
