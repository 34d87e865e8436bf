//! Common utilities for ECDSA signature encodings

use ecsig_params::der::{DER_INTEGER_TAG, DER_SIGN_BIT};

use alloc::vec::Vec;

/// Drop leading zero bytes, leaving the minimal unsigned magnitude
///
/// A value of zero comes back as an empty slice.
pub(crate) fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Content length of the DER INTEGER carrying an unsigned `magnitude`
///
/// One extra `0x00` is needed when the top bit is set, otherwise the value
/// would read as negative. Zero still takes one content byte.
pub(crate) fn integer_content_len(magnitude: &[u8]) -> usize {
    match magnitude.first() {
        None => 1,
        Some(&msb) if msb & DER_SIGN_BIT != 0 => magnitude.len() + 1,
        Some(_) => magnitude.len(),
    }
}

/// Append `INTEGER content_len [0x00..] magnitude` to `der`
///
/// `content_len` must come from [`integer_content_len`] and fit in a byte.
pub(crate) fn push_integer(der: &mut Vec<u8>, magnitude: &[u8], content_len: usize) {
    der.push(DER_INTEGER_TAG);
    der.push(content_len as u8);
    // Right-align the magnitude inside the content field
    der.resize(der.len() + content_len - magnitude.len(), 0x00);
    der.extend_from_slice(magnitude);
}
