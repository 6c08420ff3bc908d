use crate::base_common::Alphabet;
use std::{error, fmt};

use super::ALPHABET;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire input.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Upper bound on the encoded length of `len` octets: log(256) / log(58) is
/// about 1.37 digits per octet, plus one for the last partial digit.
pub fn max_encoded_len(len: usize) -> usize {
    len * 138 / 100 + 1
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let zeros = input.iter().take_while(|&&value| value == 0).count();

        // Digits are kept least significant first while the number grows.
        let mut index = 0;
        for &value in &input[zeros..] {
            let mut carry = value as usize;
            for digit in &mut output[..index] {
                carry += (*digit as usize) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = (carry % 58) as u8;
                index += 1;
                carry /= 58;
            }
        }
        for _ in 0..zeros {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = 0;
            index += 1;
        }
        for digit in &mut output[..index] {
            *digit = self.alphabet.encode(*digit as usize);
        }
        output[..index].reverse();
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = vec![0u8; max_encoded_len(input.as_ref().len())];
        let len = self
            .encode_into(input, &mut output)
            .expect("output buffer is sized for the whole input");
        output.truncate(len);
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}
