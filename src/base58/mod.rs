//! Base58 with the Bitcoin alphabet, which leaves out `0`, `O`, `I` and `l`.
//!
//! The whole input is one big-endian number converted by carry propagation,
//! so the cost is quadratic in the input length. Each leading zero octet is
//! written as a leading `1`.

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_into, try_decode, Decoder};
pub use encode::{encode, encode_into, Encoder};

pub const ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
