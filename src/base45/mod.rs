//! Base45 (RFC 9285). Two octets become three base-45 digits, written least
//! significant first; a trailing single octet becomes two digits.

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub const ALPHABET: Alphabet<45> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, decode_into, try_decode, Decoder};
pub use encode::{encode, encode_into, Encoder};
