//! Base16 (RFC 4648 §8).

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub const ALPHABET: Alphabet<16> = match Alphabet::new(b"0123456789ABCDEF") {
    Ok(alphabet) => match alphabet.case_insensitive() {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    },
    Err(_) => panic!("Could not build alphabet"),
};

pub const LOWERCASE_ALPHABET: Alphabet<16> = match Alphabet::new(b"0123456789abcdef") {
    Ok(alphabet) => match alphabet.case_insensitive() {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    },
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, decode_into, try_decode, Decoder};
pub use encode::{encode, encode_into, Encoder};
