use crate::{Chronometer, Codec, CodecReport, Error, Logger, PartialLogger};
use std::time::Duration;

/// Encodes then decodes `payload` `iterations` times, checking every decode
/// against the payload.
pub fn run(codec: Codec, payload: &[u8], iterations: usize, log_interval: usize, logger: &Logger) -> Result<CodecReport, Error> {
    let mut partial_logger = PartialLogger::new(log_interval, logger);
    let mut encode_duration = Duration::ZERO;
    let mut decode_duration = Duration::ZERO;
    let mut encoded_size = 0;
    for iteration in 0..iterations {
        partial_logger.log(|index| format!("{} iteration {}/{}", codec, index + 1, iterations));

        let chronometer = Chronometer::new();
        let encoded = codec.encode(payload);
        encode_duration += chronometer.elapsed();

        let chronometer = Chronometer::new();
        let decoded = codec.decode(&encoded)?;
        decode_duration += chronometer.elapsed();

        if decoded != payload {
            return Err(Error::round_trip(codec, iteration));
        }
        encoded_size = encoded.len();
    }
    Ok(CodecReport::new(codec, payload.len(), encoded_size, iterations, encode_duration, decode_duration))
}

#[cfg(test)]
mod tests {
    use crate::{payload, Codec, Logger};

    #[test]
    fn run() {
        let logger = Logger::new();
        let payload = payload::generate("bases", 300);
        for codec in Codec::ALL {
            assert!(super::run(codec, &payload, 2, 1, &logger).is_ok(), "{}", codec);
        }
    }
}
