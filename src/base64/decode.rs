use super::{Alphabet, ALPHABET};
use crate::base_binary::{Padding, TrailingBits};
pub use crate::base_binary::decode::Error;

pub struct Decoder<'a> {
    decoder: crate::base_binary::Decoder<'a, 64>,
}

impl<'a> Decoder<'a> {
    /// Decoding stops at the first `=`; missing padding is accepted. Unlike
    /// Base32, the bits left over after the last octet are not checked.
    pub const fn new(alphabet: &'a Alphabet<64>) -> Self {
        Self {
            decoder: crate::base_binary::Decoder::new(alphabet, 6, Padding::Required, TrailingBits::Extend),
        }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decoder.decode_into(input, output)
    }

    pub fn try_decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decoder.decode(input)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        self.try_decode(input).unwrap_or_default()
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn try_decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().try_decode(input)
}

pub fn decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Decoder::default().decode(input)
}
