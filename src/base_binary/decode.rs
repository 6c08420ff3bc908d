use super::{Alphabet, Padding};
use crate::base_common::PADDING;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    TrailingBits { bits: usize },
    NonZeroTrailingBits { bits: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::TrailingBits { bits } => write!(f, "Input ends with {} bits that do not form an octet", bits),
            Self::NonZeroTrailingBits { bits } => write!(f, "Input ends with {} non-zero padding bits", bits),
        }
    }
}

/// What to do with the bits left over once every symbol has been consumed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TrailingBits {
    /// Any leftover bit is an error.
    Reject,
    /// Leftover bits are alignment padding and must be zero.
    RequireZero,
    /// Leftover bits are discarded, except that a trailing symbol which has
    /// not contributed to any octet yet is zero-extended into one.
    Extend,
}

pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
    padding: Padding,
    trailing_bits: TrailingBits,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize, padding: Padding, trailing_bits: TrailingBits) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self {
            alphabet,
            bits,
            padding,
            trailing_bits,
        }
    }

    /// Upper bound on the decoded length of `len` input characters.
    pub fn max_decoded_len(&self, len: usize) -> usize {
        (len * self.bits) / 8 + 1
    }

    /// Characters outside the alphabet are skipped. With `Padding::Required`
    /// the first `=` ends the input.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut output_index = 0;
        for &value in input.as_ref() {
            if self.padding == Padding::Required && value == PADDING {
                break;
            }
            let symbol = match self.alphabet.get(value) {
                Some(symbol) => symbol,
                None => continue,
            };
            accumulator = (accumulator << self.bits) | (symbol as usize);
            bits += self.bits;
            while bits >= 8 {
                bits -= 8;
                *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = (accumulator >> bits) as u8;
                output_index += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        match self.trailing_bits {
            TrailingBits::Reject if bits > 0 => return Err(Error::TrailingBits { bits }),
            TrailingBits::RequireZero if accumulator != 0 => return Err(Error::NonZeroTrailingBits { bits }),
            TrailingBits::Extend if bits >= self.bits => {
                *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = (accumulator << (8 - bits)) as u8;
                output_index += 1;
            }
            _ => {}
        }
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; self.max_decoded_len(input.as_ref().len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}
