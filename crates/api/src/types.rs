//! Core identifier and key types shared across ecsig
//!
//! This module provides the JWS algorithm identifiers, the closed set of
//! elliptic curves the transcoders are parameterized for, and the key pair
//! container handed back by external generators.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;
use ecsig_params::ecdsa::{
    ECDSA_P256_FIELD_SIZE, ECDSA_P384_FIELD_SIZE, ECDSA_P521_FIELD_SIZE, ES256_SIGNATURE_SIZE,
    ES384_SIGNATURE_SIZE, ES512_SIGNATURE_SIZE, P256_CURVE_NAME, P256_JWK_NAME, P384_CURVE_NAME,
    P384_JWK_NAME, P521_CURVE_NAME, P521_JWK_NAME,
};
use zeroize::Zeroizing;

use crate::{Error, Result};

/// JWS signature algorithm names (RFC 7518, Section 3.1)
///
/// Only the `ES*` family has a concat signature width; every other variant
/// is rejected by the transcoders with [`Error::UnsupportedAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignatureAlgorithm {
    /// Unsecured JWS
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    None,
    #[cfg_attr(feature = "serde", serde(rename = "HS256"))]
    Hs256,
    #[cfg_attr(feature = "serde", serde(rename = "HS384"))]
    Hs384,
    #[cfg_attr(feature = "serde", serde(rename = "HS512"))]
    Hs512,
    #[cfg_attr(feature = "serde", serde(rename = "RS256"))]
    Rs256,
    #[cfg_attr(feature = "serde", serde(rename = "RS384"))]
    Rs384,
    #[cfg_attr(feature = "serde", serde(rename = "RS512"))]
    Rs512,
    /// ECDSA using P-256 and SHA-256
    #[cfg_attr(feature = "serde", serde(rename = "ES256"))]
    Es256,
    /// ECDSA using P-384 and SHA-384
    #[cfg_attr(feature = "serde", serde(rename = "ES384"))]
    Es384,
    /// ECDSA using P-521 and SHA-512
    #[cfg_attr(feature = "serde", serde(rename = "ES512"))]
    Es512,
    #[cfg_attr(feature = "serde", serde(rename = "PS256"))]
    Ps256,
    #[cfg_attr(feature = "serde", serde(rename = "PS384"))]
    Ps384,
    #[cfg_attr(feature = "serde", serde(rename = "PS512"))]
    Ps512,
}

impl SignatureAlgorithm {
    /// Every known algorithm, in JWA registry order
    pub const ALL: [SignatureAlgorithm; 13] = [
        Self::None,
        Self::Hs256,
        Self::Hs384,
        Self::Hs512,
        Self::Rs256,
        Self::Rs384,
        Self::Rs512,
        Self::Es256,
        Self::Es384,
        Self::Es512,
        Self::Ps256,
        Self::Ps384,
        Self::Ps512,
    ];

    /// The JWA `alg` header value
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
            Self::Rs256 => "RS256",
            Self::Rs384 => "RS384",
            Self::Rs512 => "RS512",
            Self::Es256 => "ES256",
            Self::Es384 => "ES384",
            Self::Es512 => "ES512",
            Self::Ps256 => "PS256",
            Self::Ps384 => "PS384",
            Self::Ps512 => "PS512",
        }
    }

    /// Returns `true` for the ECDSA family
    pub const fn is_elliptic_curve(self) -> bool {
        matches!(self, Self::Es256 | Self::Es384 | Self::Es512)
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| Error::unsupported(s))
    }
}

/// NIST prime curves with a JWS signature algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EcCurve {
    /// secp256r1, used by ES256
    #[cfg_attr(feature = "serde", serde(rename = "P-256"))]
    P256,
    /// secp384r1, used by ES384
    #[cfg_attr(feature = "serde", serde(rename = "P-384"))]
    P384,
    /// secp521r1, used by ES512
    #[cfg_attr(feature = "serde", serde(rename = "P-521"))]
    P521,
}

impl EcCurve {
    /// ASN.1 named curve identifier, as understood by key generators
    pub const fn curve_name(self) -> &'static str {
        match self {
            Self::P256 => P256_CURVE_NAME,
            Self::P384 => P384_CURVE_NAME,
            Self::P521 => P521_CURVE_NAME,
        }
    }

    /// JWK `crv` parameter value
    pub const fn jwk_name(self) -> &'static str {
        match self {
            Self::P256 => P256_JWK_NAME,
            Self::P384 => P384_JWK_NAME,
            Self::P521 => P521_JWK_NAME,
        }
    }

    /// Width in bytes of each of R and S
    pub const fn field_size(self) -> usize {
        match self {
            Self::P256 => ECDSA_P256_FIELD_SIZE,
            Self::P384 => ECDSA_P384_FIELD_SIZE,
            Self::P521 => ECDSA_P521_FIELD_SIZE,
        }
    }

    /// Length of an R || S signature on this curve
    pub const fn signature_len(self) -> usize {
        match self {
            Self::P256 => ES256_SIGNATURE_SIZE,
            Self::P384 => ES384_SIGNATURE_SIZE,
            Self::P521 => ES512_SIGNATURE_SIZE,
        }
    }

    /// The JWS algorithm signing with this curve
    pub const fn algorithm(self) -> SignatureAlgorithm {
        match self {
            Self::P256 => SignatureAlgorithm::Es256,
            Self::P384 => SignatureAlgorithm::Es384,
            Self::P521 => SignatureAlgorithm::Es512,
        }
    }
}

impl fmt::Display for EcCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.jwk_name())
    }
}

impl TryFrom<SignatureAlgorithm> for EcCurve {
    type Error = Error;

    fn try_from(alg: SignatureAlgorithm) -> Result<Self> {
        match alg {
            SignatureAlgorithm::Es256 => Ok(Self::P256),
            SignatureAlgorithm::Es384 => Ok(Self::P384),
            SignatureAlgorithm::Es512 => Ok(Self::P521),
            SignatureAlgorithm::None
            | SignatureAlgorithm::Hs256
            | SignatureAlgorithm::Hs384
            | SignatureAlgorithm::Hs512
            | SignatureAlgorithm::Rs256
            | SignatureAlgorithm::Rs384
            | SignatureAlgorithm::Rs512
            | SignatureAlgorithm::Ps256
            | SignatureAlgorithm::Ps384
            | SignatureAlgorithm::Ps512 => Err(Error::unsupported(alg)),
        }
    }
}

impl From<EcCurve> for SignatureAlgorithm {
    fn from(curve: EcCurve) -> Self {
        curve.algorithm()
    }
}

/// An elliptic curve key pair produced by a [`KeyPairGenerator`]
///
/// The encodings are whatever the generator emits (typically SEC1 for the
/// public key and the big-endian scalar for the secret key); ecsig never
/// interprets them. The secret key is wiped when the pair is dropped.
///
/// [`KeyPairGenerator`]: crate::KeyPairGenerator
#[derive(Clone)]
pub struct EcKeyPair {
    curve: EcCurve,
    public_key: Vec<u8>,
    secret_key: Zeroizing<Vec<u8>>,
}

impl EcKeyPair {
    /// Assemble a key pair from generator output
    pub fn new(curve: EcCurve, public_key: Vec<u8>, secret_key: Vec<u8>) -> Self {
        Self {
            curve,
            public_key,
            secret_key: Zeroizing::new(secret_key),
        }
    }

    /// Curve the pair belongs to
    pub fn curve(&self) -> EcCurve {
        self.curve
    }

    /// Public key bytes
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Secret key bytes
    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    /// Split into the public key and the zeroizing secret key
    pub fn into_parts(self) -> (Vec<u8>, Zeroizing<Vec<u8>>) {
        (self.public_key, self.secret_key)
    }
}

impl fmt::Debug for EcKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcKeyPair")
            .field("curve", &self.curve)
            .field("public_key_len", &self.public_key.len())
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
