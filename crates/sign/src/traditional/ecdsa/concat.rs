//! `R || S` to ASN.1/DER transcoding

use alloc::vec::Vec;

use ecsig_api::{Error, Result};
use ecsig_params::der::{
    DER_INTEGER_HEADER_SIZE, DER_LONG_FORM_ONE_BYTE, DER_LONG_FORM_ONE_BYTE_MAX,
    DER_SEQUENCE_TAG, DER_SHORT_FORM_MAX,
};

use super::common::{integer_content_len, push_integer, strip_leading_zeros};

const CONTEXT: &str = "concat to DER";

fn reject(reason: &'static str) -> Error {
    trace_event!(debug, reason, "rejecting concat signature");
    Error::invalid_format(CONTEXT, reason)
}

/// Transcode a JWS `R || S` signature into canonical ASN.1/DER for use by a
/// DER-consuming verifier
///
/// The first half of `concat` is R and the second half is S. Each half has
/// its leading zeros stripped; a `0x00` is prepended when the first
/// remaining byte has its top bit set, and a zero value is encoded as the
/// single content byte `0x00`. The outer length uses short form below 128
/// and `0x81 LEN` otherwise.
///
/// An odd-length buffer is rejected here rather than splitting it unevenly
/// with the remainder taken as S or dropping the trailing byte.
///
/// The length is not checked against any algorithm here; use
/// [`signature_byte_array_length`] or [`ConcatSignature::from_bytes_for`]
/// for that.
///
/// # Errors
///
/// [`Error::InvalidSignatureFormat`] when `concat` has odd length, or when
/// the SEQUENCE content would exceed 255 bytes and so need a length form
/// this codec does not write.
///
/// [`signature_byte_array_length`]: super::signature_byte_array_length
/// [`ConcatSignature::from_bytes_for`]: super::ConcatSignature::from_bytes_for
pub fn transcode_signature_to_der(concat: &[u8]) -> Result<Vec<u8>> {
    if concat.len() % 2 != 0 {
        return Err(reject("odd signature length"));
    }

    let (r, s) = concat.split_at(concat.len() / 2);
    let r = strip_leading_zeros(r);
    let s = strip_leading_zeros(s);

    let r_content = integer_content_len(r);
    let s_content = integer_content_len(s);

    let seq_len = 2 * DER_INTEGER_HEADER_SIZE + r_content + s_content;
    if seq_len > DER_LONG_FORM_ONE_BYTE_MAX {
        return Err(reject("SEQUENCE content longer than 255 bytes"));
    }

    let header_len = if seq_len > DER_SHORT_FORM_MAX { 3 } else { 2 };
    let mut der = Vec::with_capacity(header_len + seq_len);

    der.push(DER_SEQUENCE_TAG);
    if seq_len > DER_SHORT_FORM_MAX {
        der.push(DER_LONG_FORM_ONE_BYTE);
    }
    der.push(seq_len as u8);

    push_integer(&mut der, r, r_content);
    push_integer(&mut der, s, s_content);

    Ok(der)
}
