use crate::{Codec, Error};
use std::{env, error, num::NonZeroUsize};

#[derive(Debug, Clone)]
pub struct Configuration {
    payload_size: usize,
    iterations: usize,
    seed: String,
    codecs: Vec<Codec>,
    log_interval: usize,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, Error> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or_else(|| Error::missing(key)),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|_| Error::invalid(key, &value)),
        None => default.ok_or_else(|| Error::missing(key)),
    }
}

fn parse_codecs(value: &str) -> Result<Vec<Codec>, Error> {
    value.split(',').map(|name| name.trim().parse()).collect()
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let payload_size = var_map(&lookup, "PAYLOAD_SIZE", |size| size.parse(), Some(65536))?;
        let iterations = var_map(&lookup, "ITERATIONS", |iterations| iterations.parse::<NonZeroUsize>(), NonZeroUsize::new(16))?;
        let seed = var(&lookup, "SEED", Some(String::from("bases")))?;
        let codecs = var_map(&lookup, "CODECS", parse_codecs, Some(Codec::ALL.to_vec()))?;
        let log_interval = var_map(&lookup, "LOG_INTERVAL", |interval| interval.parse::<NonZeroUsize>(), NonZeroUsize::new(4))?;
        Ok(Self {
            payload_size,
            iterations: iterations.get(),
            seed,
            codecs,
            log_interval: log_interval.get(),
        })
    }

    pub fn payload_size(&self) -> usize {
        self.payload_size
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn codecs(&self) -> &[Codec] {
        &self.codecs
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }
}
