//! Base32 (RFC 4648 §6), plus the extended hex alphabet of §7.

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub const ALPHABET: Alphabet<32> = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567") {
    Ok(alphabet) => match alphabet.case_insensitive() {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    },
    Err(_) => panic!("Could not build alphabet"),
};

pub const EXTENDED_HEX_ALPHABET: Alphabet<32> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV") {
    Ok(alphabet) => match alphabet.case_insensitive() {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    },
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, decode_into, try_decode, Decoder};
pub use encode::{encode, encode_into, Encoder};
