//! Constants for the Elliptic Curve Digital Signature Algorithm over the
//! NIST prime curves used by JWS (RFC 7518, Section 3.4)

/// Size of a P-256 scalar (and of each of R and S) in bytes
pub const ECDSA_P256_FIELD_SIZE: usize = 32;

/// Size of a P-384 scalar (and of each of R and S) in bytes
pub const ECDSA_P384_FIELD_SIZE: usize = 48;

/// Size of a P-521 scalar (and of each of R and S) in bytes
///
/// 521 bits round up to 66 bytes, not 65.
pub const ECDSA_P521_FIELD_SIZE: usize = 66;

/// Length of an ES256 signature in R || S form
pub const ES256_SIGNATURE_SIZE: usize = 2 * ECDSA_P256_FIELD_SIZE;

/// Length of an ES384 signature in R || S form
pub const ES384_SIGNATURE_SIZE: usize = 2 * ECDSA_P384_FIELD_SIZE;

/// Length of an ES512 signature in R || S form
pub const ES512_SIGNATURE_SIZE: usize = 2 * ECDSA_P521_FIELD_SIZE;

/// ASN.1 named curve for P-256
pub const P256_CURVE_NAME: &str = "secp256r1";

/// ASN.1 named curve for P-384
pub const P384_CURVE_NAME: &str = "secp384r1";

/// ASN.1 named curve for P-521
pub const P521_CURVE_NAME: &str = "secp521r1";

/// JWK `crv` value for P-256
pub const P256_JWK_NAME: &str = "P-256";

/// JWK `crv` value for P-384
pub const P384_JWK_NAME: &str = "P-384";

/// JWK `crv` value for P-521
pub const P521_JWK_NAME: &str = "P-521";
