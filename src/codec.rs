use crate::Error;
use bases::{base16, base32, base45, base58, base64};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Base58 encoding and decoding are quadratic in the payload length.
pub const BASE58_MAX_PAYLOAD_SIZE: usize = 4096;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    Base16,
    Base32,
    Base45,
    Base58,
    Base64,
}

impl Codec {
    pub const ALL: [Codec; 5] = [
        Codec::Base16,
        Codec::Base32,
        Codec::Base45,
        Codec::Base58,
        Codec::Base64,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Codec::Base16 => "base16",
            Codec::Base32 => "base32",
            Codec::Base45 => "base45",
            Codec::Base58 => "base58",
            Codec::Base64 => "base64",
        }
    }

    pub fn max_payload_size(&self) -> Option<usize> {
        match self {
            Codec::Base58 => Some(BASE58_MAX_PAYLOAD_SIZE),
            _ => None,
        }
    }

    pub fn encode(&self, input: &[u8]) -> String {
        match self {
            Codec::Base16 => base16::encode(input),
            Codec::Base32 => base32::encode(input),
            Codec::Base45 => base45::encode(input),
            Codec::Base58 => base58::encode(input),
            Codec::Base64 => base64::encode(input),
        }
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, Error> {
        match self {
            Codec::Base16 => base16::try_decode(input).map_err(|error| Error::decode(*self, error)),
            Codec::Base32 => base32::try_decode(input).map_err(|error| Error::decode(*self, error)),
            Codec::Base45 => base45::try_decode(input).map_err(|error| Error::decode(*self, error)),
            Codec::Base58 => base58::try_decode(input).map_err(|error| Error::decode(*self, error)),
            Codec::Base64 => base64::try_decode(input).map_err(|error| Error::decode(*self, error)),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Codec {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Codec::ALL
            .iter()
            .copied()
            .find(|codec| codec.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::new(format!("Unknown codec {}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::Codec;

    #[test]
    fn from_str() {
        assert_eq!("base58".parse::<Codec>().unwrap(), Codec::Base58);
        assert_eq!("Base64".parse::<Codec>().unwrap(), Codec::Base64);
        assert_eq!("base85".parse::<Codec>().unwrap_err().to_string(), "Unknown codec base85");
        for codec in Codec::ALL {
            assert_eq!(codec.to_string().parse::<Codec>().unwrap(), codec);
        }
    }

    #[test]
    fn serialize() {
        assert_eq!(serde_json::to_string(&Codec::Base45).unwrap(), "\"base45\"");
        assert_eq!(serde_json::to_string(&Codec::ALL).unwrap(), serde_json::to_string(&Codec::ALL.map(|codec| codec.name())).unwrap());
    }

    #[test]
    fn encode() {
        assert_eq!(Codec::Base16.encode(b"foobar"), "666F6F626172");
        assert_eq!(Codec::Base45.encode(b"AB"), "BB8");
        assert_eq!(Codec::Base64.encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn decode() {
        for codec in Codec::ALL {
            assert_eq!(codec.decode(&codec.encode(b"Hello World!")).unwrap(), b"Hello World!");
        }
        assert_eq!(Codec::Base16.decode("FF80F").unwrap_err().to_string(), "base16: Input ends with 4 bits that do not form an octet");
        assert_eq!(Codec::Base58.decode("10").unwrap_err().to_string(), "base58: Invalid character '0' at index 1");
    }
}
