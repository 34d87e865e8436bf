//! ASN.1/DER to `R || S` transcoding
//!
//! Accepted input is
//!
//! ```text
//! 30 LEN [81 LEN2] 02 rLen R 02 sLen S
//! ```
//!
//! with a short-form outer length (1..=0x7f) or a long form carrying exactly
//! one length byte. Lengths needing two or more bytes (`0x82` and up) are
//! rejected even though they are valid DER; no supported curve produces them.

use alloc::vec;
use alloc::vec::Vec;

use ecsig_api::{Error, Result};
use ecsig_params::der::{
    DER_INTEGER_HEADER_SIZE, DER_INTEGER_TAG, DER_LONG_FORM_BIT, DER_LONG_FORM_ONE_BYTE,
    DER_MIN_SIGNATURE_SIZE, DER_SEQUENCE_TAG,
};

use super::common::strip_leading_zeros;

const CONTEXT: &str = "DER to concat";

fn reject(reason: &'static str) -> Error {
    trace_event!(debug, reason, "rejecting DER signature");
    Error::invalid_format(CONTEXT, reason)
}

/// Transcode an ASN.1/DER ECDSA signature into the concatenated `R || S`
/// form expected by JWS
///
/// Leading `0x00` bytes are stripped from both INTEGERs and each magnitude
/// is right-aligned in a zero-filled half of width
/// `max(|R|, |S|, output_len / 2)`.
///
/// The result is `output_len` bytes whenever R and S fit in
/// `output_len / 2` bytes. A component longer than that grows both halves
/// instead of being truncated or rejected, so callers must not assume the
/// output is exactly `output_len` bytes.
///
/// # Errors
///
/// [`Error::InvalidSignatureFormat`] when the input is shorter than 8
/// bytes, lacks the SEQUENCE or INTEGER tags, uses an unsupported length
/// encoding, or declares lengths that disagree with each other or with the
/// buffer. Every check runs before the output is allocated.
pub fn transcode_signature_to_concat(der: &[u8], output_len: usize) -> Result<Vec<u8>> {
    if der.len() < DER_MIN_SIGNATURE_SIZE {
        return Err(reject("signature shorter than 8 bytes"));
    }
    if der[0] != DER_SEQUENCE_TAG {
        return Err(reject("missing SEQUENCE tag"));
    }

    // Position of R's INTEGER tag
    let offset = match der[1] {
        0x01..=0x7f => 2,
        DER_LONG_FORM_ONE_BYTE => 3,
        _ => return Err(reject("unsupported SEQUENCE length encoding")),
    };

    // offset + 1 < 8 <= der.len()
    let r_len = der[offset + 1];
    if r_len & DER_LONG_FORM_BIT != 0 {
        return Err(reject("unsupported INTEGER length encoding for R"));
    }
    let r_len = usize::from(r_len);
    let r_start = offset + DER_INTEGER_HEADER_SIZE;
    let s_tag_pos = r_start + r_len;

    let s_len = match der.get(s_tag_pos + 1) {
        Some(&len) if len & DER_LONG_FORM_BIT == 0 => usize::from(len),
        Some(_) => return Err(reject("unsupported INTEGER length encoding for S")),
        None => return Err(reject("R length exceeds signature")),
    };
    let s_start = s_tag_pos + DER_INTEGER_HEADER_SIZE;

    let seq_len = usize::from(der[offset - 1]);
    if seq_len != der.len() - offset {
        return Err(reject("SEQUENCE length does not match remaining bytes"));
    }
    if seq_len != 2 * DER_INTEGER_HEADER_SIZE + r_len + s_len {
        return Err(reject("SEQUENCE length does not match INTEGER lengths"));
    }
    if der[offset] != DER_INTEGER_TAG || der[s_tag_pos] != DER_INTEGER_TAG {
        return Err(reject("missing INTEGER tag"));
    }

    // The length checks above pin s_start + s_len to der.len()
    let r = strip_leading_zeros(&der[r_start..s_tag_pos]);
    let s = strip_leading_zeros(&der[s_start..]);

    let nominal = output_len / 2;
    let raw_len = r.len().max(s.len()).max(nominal);
    if raw_len > nominal {
        trace_event!(
            warn,
            raw_len,
            nominal,
            "DER component wider than the algorithm width; growing concat signature"
        );
    }

    let mut concat = vec![0u8; 2 * raw_len];
    concat[raw_len - r.len()..raw_len].copy_from_slice(r);
    concat[2 * raw_len - s.len()..].copy_from_slice(s);

    Ok(concat)
}
