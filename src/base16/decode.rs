use super::{Alphabet, ALPHABET};
use crate::base_binary::{Padding, TrailingBits};
pub use crate::base_binary::decode::Error;

pub struct Decoder<'a> {
    decoder: crate::base_binary::Decoder<'a, 16>,
}

impl<'a> Decoder<'a> {
    /// Characters outside `alphabet` are skipped. An odd number of hex digits
    /// is an error.
    pub const fn new(alphabet: &'a Alphabet<16>) -> Self {
        Self {
            decoder: crate::base_binary::Decoder::new(alphabet, 4, Padding::None, TrailingBits::Reject),
        }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decoder.decode_into(input, output)
    }

    pub fn try_decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decoder.decode(input)
    }

    /// Like `try_decode`, but malformed input yields an empty vector.
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
    use super::{Decoder, Error};
    use crate::base16::LOWERCASE_ALPHABET;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), b"".to_vec());
        assert_eq!(super::decode("66"), b"f".to_vec());
        assert_eq!(super::decode("666F"), b"fo".to_vec());
        assert_eq!(super::decode("666F6F"), b"foo".to_vec());
        assert_eq!(super::decode("666F6F62"), b"foob".to_vec());
        assert_eq!(super::decode("666F6F6261"), b"fooba".to_vec());
        assert_eq!(super::decode("666F6F626172"), b"foobar".to_vec());
        assert_eq!(
            super::decode("54686520717569636B2062726F776E20666F78206A756D7073206F76657220746865206C617A7920646F67"),
            b"The quick brown fox jumps over the lazy dog".to_vec()
        );
        assert_eq!(super::decode("FF"), vec![0xff]);
        assert_eq!(super::decode("FF80"), vec![0xff, 0x80]);
    }

    #[test]
    fn decode_lowercase() {
        assert_eq!(super::decode("666f"), b"fo".to_vec());
        assert_eq!(super::decode("666f6f626172"), b"foobar".to_vec());
        assert_eq!(super::decode("48656c6c6F20776f726C64"), b"Hello world".to_vec());
    }

    #[test]
    fn decode_skips_separators() {
        assert_eq!(super::decode("6 66.f"), b"fo".to_vec());
        assert_eq!(super::decode("66 6 .f6f"), b"foo".to_vec());
        assert_eq!(super::decode("666;f6 f' 62"), b"foob".to_vec());
        assert_eq!(super::decode("666f 6 f6.2'61"), b"fooba".to_vec());
        assert_eq!(super::decode("6. 66f#6f&62;61!72"), b"foobar".to_vec());
        assert_eq!(super::decode("de:ad:be:ef\n"), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_odd_length() {
        assert_eq!(super::decode("FF80F"), Vec::<u8>::new());
        assert_eq!(super::decode("F"), Vec::<u8>::new());
        assert_eq!(super::try_decode("FF80F"), Err(Error::TrailingBits { bits: 4 }));
        assert_eq!(super::try_decode("FF 80 GG"), Ok(vec![0xff, 0x80]));
    }

    #[test]
    fn decode_lowercase_alphabet() {
        let decoder = Decoder::new(&LOWERCASE_ALPHABET);
        assert_eq!(decoder.decode("48656c6c6f"), b"Hello".to_vec());
        assert_eq!(decoder.decode("48656C6C6F"), b"Hello".to_vec());
        assert_eq!(decoder.decode("DE:ad:Be:eF"), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 2];
        assert_eq!(super::decode_into("dead", &mut output), Ok(2));
        assert_eq!(output, [0xde, 0xad]);
        assert_eq!(super::decode_into("deadbe", &mut output), Err(Error::BufferTooSmall));
    }
}
