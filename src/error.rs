use crate::Codec;
use std::{error, fmt};

/// Message-carrying error of the benchmark binary. Codec errors are flattened
/// into their `Display` text prefixed with the codec name.
#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn missing(key: &str) -> Self {
        Self::new(format!("Missing {}", key))
    }

    pub fn invalid(key: &str, value: &str) -> Self {
        Self::new(format!("Invalid {} {}", key, value))
    }

    pub fn decode(codec: Codec, error: impl fmt::Display) -> Self {
        Self::new(format!("{}: {}", codec, error))
    }

    pub fn round_trip(codec: Codec, iteration: usize) -> Self {
        Self::new(format!("{}: decoded output differs from the payload at iteration {}", codec, iteration))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}
