use super::{Alphabet, ALPHABET};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { index: usize, character: u8 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

/// Same set as C's `isspace`: space, `\t`, `\n`, `\v`, `\f` and `\r`.
fn is_whitespace(value: u8) -> bool {
    matches!(value, b' ' | b'\t'..=b'\r')
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Whitespace is ignored anywhere in the input; any other character
    /// outside the alphabet is an error.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();

        let zero = self.alphabet.encode(0);
        let mut zeros = 0;
        let mut digits_start = 0;
        for &value in input {
            if value == zero {
                zeros += 1;
            } else if !is_whitespace(value) {
                break;
            }
            digits_start += 1;
        }

        // Octets are kept least significant first while the number grows.
        let mut output_index = 0;
        for (input_index, &value) in input.iter().enumerate().skip(digits_start) {
            if is_whitespace(value) {
                continue;
            }
            let mut carry = self.alphabet.decode(value, input_index)? as usize;

            for value in &mut output[..output_index] {
                carry += (*value as usize) * 58;
                *value = (carry & 0xFF) as u8;
                carry >>= 8;
            }

            while carry > 0 {
                let value = output.get_mut(output_index).ok_or(Error::BufferTooSmall)?;
                *value = (carry & 0xFF) as u8;
                output_index += 1;
                carry >>= 8;
            }
        }

        for _ in 0..zeros {
            let value = output.get_mut(output_index).ok_or(Error::BufferTooSmall)?;
            *value = 0;
            output_index += 1;
        }
        output[0..output_index].reverse();
        Ok(output_index)
    }

    /// Never needs more octets than there are input characters, which is
    /// reached when every character is a leading `1`.
    pub fn try_decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; input.as_ref().len()];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        self.try_decode(input).unwrap_or_default()
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn try_decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().try_decode(input)
}

pub fn decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}
