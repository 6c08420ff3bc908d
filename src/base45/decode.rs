use super::{Alphabet, ALPHABET};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidLength { symbols: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidLength { symbols } => write!(f, "Invalid number of Base45 symbols {}", symbols),
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<45>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<45>) -> Self {
        Self { alphabet }
    }

    /// Characters outside the alphabet, lowercase letters included, are
    /// skipped. Complete groups of three symbols yield two octets; a final
    /// group of two symbols yields one.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut group = [0usize; 3];
        let mut group_size = 0;
        let mut symbols = 0;
        let mut output_index = 0;

        for &value in input.as_ref() {
            let digit = match self.alphabet.get(value) {
                Some(digit) => digit,
                None => continue,
            };
            group[group_size] = digit as usize;
            group_size += 1;
            symbols += 1;
            if group_size == 3 {
                // Triples above 0xffff are truncated to their low 16 bits.
                let value = group[0] + group[1] * 45 + group[2] * 45 * 45;
                for octet in [(value >> 8) as u8, value as u8] {
                    *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = octet;
                    output_index += 1;
                }
                group_size = 0;
            }
        }

        match group_size {
            0 => {}
            2 => {
                *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = (group[0] + group[1] * 45) as u8;
                output_index += 1;
            }
            _ => return Err(Error::InvalidLength { symbols }),
        }
        Ok(output_index)
    }

    pub fn try_decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let len = input.as_ref().len();
        let mut output = vec![0u8; (len / 3) * 2 + 1];
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

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn try_decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().try_decode(input)
}

pub fn decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Decoder::default().decode(input)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), b"".to_vec());
        assert_eq!(super::decode("BB8"), b"AB".to_vec());
        assert_eq!(super::decode("%69 VD92EX0"), b"Hello!!".to_vec());
        assert_eq!(super::decode("UJCLQE7W581"), b"base-45".to_vec());
        assert_eq!(super::decode("QED8WEX0"), b"ietf!".to_vec());
        assert_eq!(super::decode("%69 VDL2"), b"Hello".to_vec());
        assert_eq!(
            super::decode("8UADZCKFEOEDJOD2KC54EM-DX.CH8FSKDQ$D.OE44E5$CS44+8DK44OEC3EFGVCD2"),
            b"The quick brown fox jumps over the lazy dog".to_vec()
        );
        assert_eq!(super::decode("00"), vec![0x00]);
        assert_eq!(super::decode("000"), vec![0x00, 0x00]);
        assert_eq!(super::decode("00000"), vec![0x00, 0x00, 0x00]);
        assert_eq!(super::decode("FGW"), vec![0xff, 0xff]);
        assert_eq!(super::decode("U5"), vec![0xff]);
    }

    #[test]
    fn decode_skips_invalid_characters() {
        assert_eq!(super::decode("B\nB8"), b"AB".to_vec());
        assert_eq!(super::decode("QED8\tWEX0\r\n"), b"ietf!".to_vec());
        assert_eq!(super::decode("BB8#!_"), b"AB".to_vec());
    }

    #[test]
    fn decode_is_case_sensitive() {
        // Lowercase letters are not part of the alphabet and are skipped.
        assert_eq!(super::decode("BbB8"), b"AB".to_vec());
        assert_eq!(super::decode("bb8"), Vec::<u8>::new());
        assert_eq!(super::try_decode("bb8"), Err(Error::InvalidLength { symbols: 1 }));
    }

    #[test]
    fn decode_invalid_length() {
        assert_eq!(super::decode("B"), Vec::<u8>::new());
        assert_eq!(super::decode("BB8B"), Vec::<u8>::new());
        assert_eq!(super::try_decode("BB8B"), Err(Error::InvalidLength { symbols: 4 }));
    }

    #[test]
    fn decode_overflowing_triple() {
        // ":::" is 44 + 44 * 45 + 44 * 45^2 = 0x163f4.
        assert_eq!(super::decode(":::"), vec![0x63, 0xf4]);
    }

    #[test]
    fn decode_overflowing_pair() {
        // "::" is 44 + 44 * 45 = 0x7e8, only the low octet is kept.
        assert_eq!(super::decode("::"), vec![0xe8]);
        assert_eq!(super::decode("BB8::"), vec![0x41, 0x42, 0xe8]);
    }

    #[test]
    fn decode_all_octet_pairs() {
        for first in 0..=255u8 {
            assert_eq!(super::decode(crate::base45::encode([first])), vec![first]);
            for second in 0..=255u8 {
                assert_eq!(super::decode(crate::base45::encode([first, second])), vec![first, second]);
            }
        }
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 2];
        assert_eq!(super::decode_into("BB8", &mut output), Ok(2));
        assert_eq!(&output, b"AB");
        assert_eq!(super::decode_into("BB8U5", &mut output), Err(Error::BufferTooSmall));
    }
}
