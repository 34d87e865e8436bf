//! Known DER / `R || S` signature pairs

use ecsig_api::SignatureAlgorithm;

/// A DER signature and its JWS form, both hex encoded
#[derive(Debug, Clone, Copy)]
pub struct TranscodeVector {
    pub alg: SignatureAlgorithm,
    pub der: &'static str,
    pub concat: &'static str,
}

impl TranscodeVector {
    pub fn der_bytes(&self) -> Vec<u8> {
        hex::decode(self.der).expect("valid hex in DER vector")
    }

    pub fn concat_bytes(&self) -> Vec<u8> {
        hex::decode(self.concat).expect("valid hex in concat vector")
    }
}

/// Canonical DER on one side, fixed-width `R || S` on the other; both
/// directions must reproduce the opposite column exactly.
pub const CANONICAL: &[TranscodeVector] = &[
    // All zero
    TranscodeVector {
        alg: SignatureAlgorithm::Es256,
        der: "3006020100020100",
        concat: concat!(
            "0000000000000000000000000000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000000",
        ),
    },
    // RFC 6979 A.2.5, P-256 / SHA-256 / "sample": both halves need a sign byte
    TranscodeVector {
        alg: SignatureAlgorithm::Es256,
        der: concat!(
            "3046",
            "022100EFD48B2AACB6A8FD1140DD9CD45E81D69D2C877B56AAF991C34D0EA84EAF3716",
            "022100F7CB1C942D657C41D436C7A1B6E29F65F3E900DBB9AFF4064DC4AB2F843ACDA8",
        ),
        concat: concat!(
            "EFD48B2AACB6A8FD1140DD9CD45E81D69D2C877B56AAF991C34D0EA84EAF3716",
            "F7CB1C942D657C41D436C7A1B6E29F65F3E900DBB9AFF4064DC4AB2F843ACDA8",
        ),
    },
    // Short R and S on P-384
    TranscodeVector {
        alg: SignatureAlgorithm::Es384,
        der: "30080203010203020101",
        concat: concat!(
            "000000000000000000000000000000000000000000000000",
            "000000000000000000000000000000000000000000010203",
            "000000000000000000000000000000000000000000000000",
            "000000000000000000000000000000000000000000000001",
        ),
    },
    // P-521 halves always start with 0x00 or 0x01 and force the 0x81 long form
    TranscodeVector {
        alg: SignatureAlgorithm::Es512,
        der: concat!(
            "308188",
            "0242",
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
            "0242",
            "010000000000000000000000000000000000000000000000000000000000000000",
            "000000000000000000000000000000000000000000000000000000000000000001",
        ),
        concat: concat!(
            "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
            "010000000000000000000000000000000000000000000000000000000000000000",
            "000000000000000000000000000000000000000000000000000000000000000001",
        ),
    },
];
