use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

/// Bijection between the digit values `0..N` and ASCII characters, together
/// with the reverse table covering every possible input byte.
#[derive(Copy, Clone, Debug)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 256],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    /// Digit value of `character`, or `None` if it is not part of the alphabet.
    pub fn get(&self, character: u8) -> Option<u8> {
        self.decode[character as usize]
    }

    /// Strict lookup used by codecs that reject unknown characters.
    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { index, character: value });
        }
        match self.get(value) {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 256] = [None; 256];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Also accept every letter in the other case. Encoding is unaffected.
    pub const fn case_insensitive(self) -> Result<Self, Error> {
        let Self { encode, mut decode } = self;

        let mut index = 0;
        while index < N {
            let character = encode[index];
            let other = if character.is_ascii_uppercase() {
                character.to_ascii_lowercase()
            } else {
                character.to_ascii_uppercase()
            };
            if other != character {
                if let Some(first) = decode[other as usize] {
                    return Err(Error::DuplicateCharacter {
                        character: other as char,
                        first: first as usize,
                        second: index,
                    });
                }
                decode[other as usize] = Some(index as u8);
            }
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    #[test]
    fn new() {
        let alphabet = Alphabet::new(b"abc").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.encode(2), b'c');
        assert_eq!(alphabet.get(b'b'), Some(1));
        assert_eq!(alphabet.get(b'd'), None);
        assert_eq!(
            Alphabet::new(b"aba").unwrap_err(),
            Error::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 2
            }
        );
        assert_eq!(
            Alphabet::new(&[b'a', 0xc3]).unwrap_err(),
            Error::NonAsciiCharacter { character: 0xc3, index: 1 }
        );
    }

    #[test]
    fn decode() {
        let alphabet = Alphabet::new(b"0123").unwrap();
        assert_eq!(alphabet.decode(b'3', 0), Ok(3));
        assert_eq!(
            alphabet.decode(b'4', 7),
            Err(DecodeError::InvalidCharacter { character: '4', index: 7 })
        );
        assert_eq!(
            alphabet.decode(0xff, 1),
            Err(DecodeError::NonAsciiCharacter { character: 0xff, index: 1 })
        );
    }

    #[test]
    fn case_insensitive() {
        let alphabet = Alphabet::new(b"AB7").unwrap().case_insensitive().unwrap();
        assert_eq!(alphabet.get(b'a'), Some(0));
        assert_eq!(alphabet.get(b'b'), Some(1));
        assert_eq!(alphabet.get(b'7'), Some(2));
        assert_eq!(alphabet.encode(0), b'A');

        let alphabet = Alphabet::new(b"ab7").unwrap().case_insensitive().unwrap();
        assert_eq!(alphabet.get(b'A'), Some(0));
        assert_eq!(alphabet.get(b'b'), Some(1));
        assert_eq!(alphabet.encode(1), b'b');

        assert_eq!(
            Alphabet::new(b"Aa").unwrap().case_insensitive().unwrap_err(),
            Error::DuplicateCharacter {
                character: 'a',
                first: 1,
                second: 0
            }
        );
    }
}
