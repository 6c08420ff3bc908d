use crate::Codec;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct CodecReport {
    codec: Codec,
    payload_size: usize,
    encoded_size: usize,
    expansion: f64,
    iterations: usize,
    encode_ms: f64,
    decode_ms: f64,
    encode_mib_per_s: f64,
    decode_mib_per_s: f64,
}

fn milliseconds(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e3
}

/// MiB of payload processed per second, 0 when nothing was measured.
fn throughput(octets: usize, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        octets as f64 / (1024.0 * 1024.0) / seconds
    } else {
        0.0
    }
}

impl CodecReport {
    pub fn new(codec: Codec, payload_size: usize, encoded_size: usize, iterations: usize, encode: Duration, decode: Duration) -> Self {
        let processed = payload_size * iterations;
        Self {
            codec,
            payload_size,
            encoded_size,
            expansion: if payload_size > 0 { encoded_size as f64 / payload_size as f64 } else { 0.0 },
            iterations,
            encode_ms: milliseconds(encode),
            decode_ms: milliseconds(decode),
            encode_mib_per_s: throughput(processed, encode),
            decode_mib_per_s: throughput(processed, decode),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    seed: String,
    iterations: usize,
    codecs: Vec<CodecReport>,
}

impl Report {
    pub fn new(seed: impl Into<String>, iterations: usize, codecs: Vec<CodecReport>) -> Self {
        Self {
            seed: seed.into(),
            iterations,
            codecs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CodecReport, Report};
    use crate::Codec;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn serialize() {
        let codec_report = CodecReport::new(Codec::Base64, 3 * 1024 * 1024, 4 * 1024 * 1024, 2, Duration::from_secs(2), Duration::from_millis(500));
        let report = Report::new("bases", 2, vec![codec_report]);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "seed": "bases",
                "iterations": 2,
                "codecs": [{
                    "codec": "base64",
                    "payload_size": 3145728,
                    "encoded_size": 4194304,
                    "expansion": 4.0 / 3.0,
                    "iterations": 2,
                    "encode_ms": 2000.0,
                    "decode_ms": 500.0,
                    "encode_mib_per_s": 3.0,
                    "decode_mib_per_s": 12.0,
                }],
            })
        );
    }

    #[test]
    fn empty_payload() {
        let codec_report = CodecReport::new(Codec::Base16, 0, 0, 1, Duration::from_secs(0), Duration::from_secs(0));
        assert_eq!(codec_report.expansion, 0.0);
        assert_eq!(codec_report.encode_mib_per_s, 0.0);
    }
}
