//! Codecs whose alphabet size is a power of two, converting between octets
//! and symbols by slicing fixed-width bit groups.

pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
pub use decode::{Decoder, TrailingBits};
pub use encode::Encoder;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Padding {
    /// No `=` is written, and `=` is an ordinary ignored character on input.
    None,
    /// Output is padded with `=` to a whole number of octets, and decoding
    /// stops at the first `=`.
    Required,
}
