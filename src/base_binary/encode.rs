use super::{Alphabet, Padding};
use crate::base_common::PADDING;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

fn div_ceil(lhs: usize, rhs: usize) -> usize {
    (lhs + rhs - 1) / rhs
}

pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
    padding: Padding,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize, padding: Padding) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self { alphabet, bits, padding }
    }

    /// Upper bound on the encoded length of `len` octets, padding included.
    pub fn max_encoded_len(&self, len: usize) -> usize {
        div_ceil(len, self.bits) * 8
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut index = 0;
        for &value in input.as_ref() {
            accumulator = (accumulator << 8) | (value as usize);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(accumulator >> bits);
                index += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        if bits > 0 {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(accumulator << (self.bits - bits));
            index += 1;
        }
        if self.padding == Padding::Required {
            // A padded group ends on both a symbol and an octet boundary.
            while (index * self.bits) % 8 != 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = PADDING;
                index += 1;
            }
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = vec![0u8; self.max_encoded_len(input.as_ref().len())];
        let len = self
            .encode_into(input, &mut output)
            .expect("output buffer is sized for the whole input");
        output.truncate(len);
        // Alphabets are ASCII-only by construction, and so is the padding.
        unsafe { String::from_utf8_unchecked(output) }
    }
}

#[cfg(test)]
mod tests {
    use super::{Encoder, Error};
    use crate::base_binary::{Alphabet, Padding};

    const OCTAL: Alphabet<8> = match Alphabet::new(b"01234567") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

    #[test]
    fn encode() {
        let encoder = Encoder::new(&OCTAL, 3, Padding::None);
        assert_eq!(encoder.encode(b""), "");
        assert_eq!(encoder.encode([0o377]), "776");
        assert_eq!(encoder.encode([0x00, 0x01, 0x02]), "00000402");
    }

    #[test]
    fn encode_padded() {
        let encoder = Encoder::new(&OCTAL, 3, Padding::Required);
        assert_eq!(encoder.encode([0xff]), "776=====");
        assert_eq!(encoder.encode([0x00, 0x01, 0x02]), "00000402");
    }

    #[test]
    fn encode_into() {
        let encoder = Encoder::new(&OCTAL, 3, Padding::Required);
        let mut output = [0u8; 8];
        assert_eq!(encoder.encode_into([0xff], &mut output), Ok(8));
        assert_eq!(&output, b"776=====");
        let mut output = [0u8; 4];
        assert_eq!(encoder.encode_into([0xff], &mut output), Err(Error::BufferTooSmall));
    }
}
