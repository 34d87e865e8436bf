//! ASN.1 DER constants for `SEQUENCE { INTEGER r, INTEGER s }`

/// Universal tag of a constructed SEQUENCE
pub const DER_SEQUENCE_TAG: u8 = 0x30;

/// Universal tag of an INTEGER
pub const DER_INTEGER_TAG: u8 = 0x02;

/// Long-form length prefix announcing exactly one length byte
pub const DER_LONG_FORM_ONE_BYTE: u8 = 0x81;

/// High bit of a length byte; set means long form
pub const DER_LONG_FORM_BIT: u8 = 0x80;

/// High bit of the first INTEGER content byte; set means negative
pub const DER_SIGN_BIT: u8 = 0x80;

/// Largest SEQUENCE content length encodable in short form
pub const DER_SHORT_FORM_MAX: usize = 0x7f;

/// Largest SEQUENCE content length encodable with a single long-form byte
pub const DER_LONG_FORM_ONE_BYTE_MAX: usize = 0xff;

/// Smallest accepted DER signature:
/// `30 06 02 01 xx 02 01 xx`
pub const DER_MIN_SIGNATURE_SIZE: usize = 8;

/// Tag and length bytes in front of each INTEGER
pub const DER_INTEGER_HEADER_SIZE: usize = 2;
