//! Owned signature encodings
//!
//! Thin wrappers that keep track of which encoding a byte buffer holds, so a
//! DER signature is not handed to a JWS serializer by accident (or the other
//! way round).

use alloc::vec::Vec;

use ecsig_api::{EcCurve, Error, Result, SignatureAlgorithm};

use super::{signature_byte_array_length, transcode_signature_to_concat, transcode_signature_to_der};

/// ECDSA signature encoded in ASN.1 DER format
///
/// Format: SEQUENCE { r INTEGER, s INTEGER }
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DerSignature(Vec<u8>);

/// ECDSA signature as fixed-width big-endian `R || S`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConcatSignature(Vec<u8>);

impl DerSignature {
    /// Wrap DER bytes produced by a signing API
    ///
    /// Nothing is validated until the signature is transcoded.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Transcode to `R || S` with halves at least `output_len / 2` wide
    pub fn to_concat(&self, output_len: usize) -> Result<ConcatSignature> {
        transcode_signature_to_concat(&self.0, output_len).map(ConcatSignature)
    }

    /// Transcode to `R || S` using the width of `alg`
    pub fn to_concat_for(&self, alg: SignatureAlgorithm) -> Result<ConcatSignature> {
        let output_len = signature_byte_array_length(alg)?;
        self.to_concat(output_len)
    }

    /// Raw DER bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take back the DER bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl ConcatSignature {
    /// Wrap `R || S` bytes without a length check
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Wrap `R || S` bytes after checking they match the width of `alg`
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAlgorithm`] for a non-ECDSA `alg`, and
    /// [`Error::InvalidSignatureFormat`] when the length is wrong.
    pub fn from_bytes_for(alg: SignatureAlgorithm, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let expected = signature_byte_array_length(alg)?;
        let bytes = bytes.into();
        if bytes.len() != expected {
            trace_event!(
                debug,
                expected,
                actual = bytes.len(),
                "concat signature length does not match algorithm"
            );
            return Err(Error::invalid_format(
                "concat signature",
                "length does not match algorithm",
            ));
        }
        Ok(Self(bytes))
    }

    /// Transcode to canonical DER
    pub fn to_der(&self) -> Result<DerSignature> {
        transcode_signature_to_der(&self.0).map(DerSignature)
    }

    /// The `(R, S)` halves
    pub fn components(&self) -> (&[u8], &[u8]) {
        self.0.split_at(self.0.len() / 2)
    }

    /// The curve whose width this signature has, if any
    pub fn curve(&self) -> Option<EcCurve> {
        [EcCurve::P256, EcCurve::P384, EcCurve::P521]
            .into_iter()
            .find(|curve| curve.signature_len() == self.0.len())
    }

    /// Raw `R || S` bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take back the `R || S` bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

// AsRef implementations for byte access
impl AsRef<[u8]> for DerSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ConcatSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for DerSignature {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for ConcatSignature {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<DerSignature> for Vec<u8> {
    fn from(sig: DerSignature) -> Self {
        sig.0
    }
}

impl From<ConcatSignature> for Vec<u8> {
    fn from(sig: ConcatSignature) -> Self {
        sig.0
    }
}
