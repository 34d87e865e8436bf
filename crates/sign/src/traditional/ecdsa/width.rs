//! Per-algorithm signature widths

use ecsig_api::{EcCurve, Result, SignatureAlgorithm};

/// Expected length in bytes of an `R || S` signature for `alg`
///
/// Returns 64 for ES256, 96 for ES384 and 132 for ES512. Callers use it both
/// to size the output of [`transcode_signature_to_concat`] and to check an
/// incoming concat signature before handing it to
/// [`transcode_signature_to_der`].
///
/// # Errors
///
/// [`Error::UnsupportedAlgorithm`] for any non-ECDSA algorithm.
///
/// [`transcode_signature_to_concat`]: super::transcode_signature_to_concat
/// [`transcode_signature_to_der`]: super::transcode_signature_to_der
/// [`Error::UnsupportedAlgorithm`]: ecsig_api::Error::UnsupportedAlgorithm
pub fn signature_byte_array_length(alg: SignatureAlgorithm) -> Result<usize> {
    EcCurve::try_from(alg).map(EcCurve::signature_len)
}

/// ASN.1 named curve used by `alg`, e.g. `secp256r1` for ES256
pub fn curve_name(alg: SignatureAlgorithm) -> Result<&'static str> {
    EcCurve::try_from(alg).map(EcCurve::curve_name)
}
