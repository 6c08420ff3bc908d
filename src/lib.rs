//! Binary-to-text codecs: Base16, Base32 and Base64 (RFC 4648), Base45
//! (RFC 9285) and Base58 with the Bitcoin alphabet.
//!
//! Every codec module exposes `encode`, which never fails, and `decode`,
//! which returns an empty vector for malformed input. `try_decode` reports
//! why decoding failed, and `encode_into` / `decode_into` write into a caller
//! provided buffer.
//!
//! ```
//! assert_eq!(bases::base64::encode("foobar"), "Zm9vYmFy");
//! assert_eq!(bases::base32::decode("mzxw6ytboi"), b"foobar");
//! assert!(bases::base16::decode("FF80F").is_empty());
//! ```

pub mod base16;
pub mod base32;
pub mod base45;
pub mod base58;
pub mod base64;
pub mod base_binary;
pub mod base_common;
