use super::{Alphabet, ALPHABET};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
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

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<45>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<45>) -> Self {
        Self { alphabet }
    }

    fn write_digits(&self, mut value: usize, digits: usize, output: &mut [u8], mut index: usize) -> Result<usize, Error> {
        for _ in 0..digits {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = self.alphabet.encode(value % 45);
            index += 1;
            value /= 45;
        }
        Ok(index)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut chunks = input.as_ref().chunks_exact(2);
        let mut index = 0;
        for chunk in &mut chunks {
            let value = ((chunk[0] as usize) << 8) | (chunk[1] as usize);
            index = self.write_digits(value, 3, output, index)?;
        }
        if let [value] = *chunks.remainder() {
            index = self.write_digits(value as usize, 2, output, index)?;
        }
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let len = input.as_ref().len();
        let mut output = vec![0u8; (len / 2) * 3 + (len % 2) * 2];
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
