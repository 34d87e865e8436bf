//! Property-based tests for ECDSA signature transcoding

use ecsig::prelude::*;
use proptest::prelude::*;

/// A component width (32, 48 or 66) with random R and S of that width
fn fixed_width_pair() -> impl Strategy<Value = (usize, Vec<u8>, Vec<u8>)> {
    prop_oneof![Just(32usize), Just(48usize), Just(66usize)].prop_flat_map(|half| {
        (
            Just(half),
            prop::collection::vec(any::<u8>(), half),
            prop::collection::vec(any::<u8>(), half),
        )
    })
}

/// A magnitude that skews towards leading zeros and set top bits
fn magnitude(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![Just(0x00u8), Just(0x80u8), Just(0xFFu8), any::<u8>()],
        0..=max_len,
    )
}

/// Build `INTEGER` content with `pad` extra leading zeros (non-canonical
/// when `pad > 0`)
fn padded_integer(magnitude: &[u8], pad: usize) -> Vec<u8> {
    let mut content = vec![0u8; pad];
    content.extend_from_slice(magnitude);
    if content.is_empty() {
        content.push(0);
    }
    content
}

fn der_from_contents(r: &[u8], s: &[u8]) -> Vec<u8> {
    let seq_len = 4 + r.len() + s.len();
    let mut der = vec![0x30];
    if seq_len > 0x7F {
        der.push(0x81);
    }
    der.push(seq_len as u8);
    der.extend_from_slice(&[0x02, r.len() as u8]);
    der.extend_from_slice(r);
    der.extend_from_slice(&[0x02, s.len() as u8]);
    der.extend_from_slice(s);
    der
}

/// Check that one INTEGER's content is minimal, returning the bytes after it
fn assert_minimal_integer(bytes: &[u8]) -> &[u8] {
    assert_eq!(bytes[0], 0x02);
    let len = bytes[1] as usize;
    let content = &bytes[2..2 + len];
    assert!(len >= 1);
    if len > 1 && content[0] == 0x00 {
        assert!(content[1] & 0x80 != 0, "superfluous leading zero");
    }
    assert!(content[0] & 0x80 == 0, "INTEGER would read as negative");
    &bytes[2 + len..]
}

proptest! {
    #[test]
    fn concat_round_trip_preserves_bytes((half, r, s) in fixed_width_pair()) {
        let concat = [r, s].concat();
        let der = transcode_signature_to_der(&concat).unwrap();
        let back = transcode_signature_to_concat(&der, 2 * half).unwrap();
        prop_assert_eq!(back, concat);
    }

    #[test]
    fn der_output_is_canonical((_half, r, s) in fixed_width_pair()) {
        let der = transcode_signature_to_der(&[r, s].concat()).unwrap();
        prop_assert_eq!(der[0], 0x30);

        let (seq_len, body) = if der[1] == 0x81 {
            prop_assert!(der[2] > 0x7F);
            (der[2] as usize, &der[3..])
        } else {
            (der[1] as usize, &der[2..])
        };
        prop_assert_eq!(seq_len, body.len());

        let rest = assert_minimal_integer(body);
        let rest = assert_minimal_integer(rest);
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn der_round_trip_canonicalizes(
        r in magnitude(66),
        s in magnitude(66),
        r_pad in 0usize..3,
        s_pad in 0usize..3,
    ) {
        let padded = der_from_contents(&padded_integer(&r, r_pad), &padded_integer(&s, s_pad));

        let concat = transcode_signature_to_concat(&padded, 132).unwrap();
        prop_assert_eq!(concat.len(), 132);

        // Stripping the padding does not change the decoded values
        let canonical = transcode_signature_to_der(&concat).unwrap();
        prop_assert_eq!(transcode_signature_to_concat(&canonical, 132).unwrap(), concat);
    }

    #[test]
    fn sign_bit_adds_one_content_byte(
        (half, mut r, s) in fixed_width_pair(),
        top in 0x80u8..=0xFF,
    ) {
        r[0] = top;
        let der = transcode_signature_to_der(&[r, s].concat()).unwrap();
        let body = if der[1] == 0x81 { &der[3..] } else { &der[2..] };
        prop_assert_eq!(body[1] as usize, half + 1);
        prop_assert_eq!(body[2], 0x00);
        prop_assert_eq!(body[3], top);
    }

    #[test]
    fn to_concat_never_shrinks_below_width(
        r in magnitude(40),
        s in magnitude(40),
        alg in prop_oneof![
            Just(SignatureAlgorithm::Es256),
            Just(SignatureAlgorithm::Es384),
            Just(SignatureAlgorithm::Es512),
        ],
    ) {
        let width = signature_byte_array_length(alg).unwrap();
        let der = der_from_contents(&padded_integer(&r, 0), &padded_integer(&s, 0));
        let concat = transcode_signature_to_concat(&der, width).unwrap();

        let widest = r.iter().skip_while(|&&b| b == 0).count()
            .max(s.iter().skip_while(|&&b| b == 0).count());
        prop_assert_eq!(concat.len(), 2 * widest.max(width / 2));
        prop_assert!(concat.len() % 2 == 0);
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        match transcode_signature_to_concat(&bytes, 64) {
            Ok(concat) => prop_assert!(concat.len() >= 64 && concat.len() % 2 == 0),
            Err(err) => prop_assert!(err.is_format_error()),
        }
        match transcode_signature_to_der(&bytes) {
            Ok(der) => prop_assert_eq!(der[0], 0x30),
            Err(err) => prop_assert!(err.is_format_error()),
        }
    }

    #[test]
    fn structured_garbage_never_panics(
        seq_len in any::<u8>(),
        r_len in any::<u8>(),
        tail in prop::collection::vec(any::<u8>(), 6..140),
    ) {
        let mut der = vec![0x30, seq_len, 0x02, r_len];
        der.extend_from_slice(&tail);
        if let Err(err) = transcode_signature_to_concat(&der, 96) {
            prop_assert!(err.is_format_error());
        }
    }
}
