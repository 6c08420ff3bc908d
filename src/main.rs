mod benchmark;
mod chronometer;
mod codec;
mod configuration;
mod error;
mod logger;
mod payload;
mod report;

use self::{
    chronometer::Chronometer,
    codec::Codec,
    configuration::Configuration,
    error::Error,
    logger::{Logger, PartialLogger},
    report::{CodecReport, Report},
};
use std::process;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new()?;
    let logger = Logger::new();

    let payload = payload::generate(configuration.seed(), configuration.payload_size());
    logger.log(format!("Generated {} octets from seed {:?}", payload.len(), configuration.seed()));

    let mut reports = Vec::new();
    for &codec in configuration.codecs() {
        let payload = match codec.max_payload_size() {
            Some(max_payload_size) if payload.len() > max_payload_size => {
                logger.log(format!("Capping {} payload at {} octets", codec, max_payload_size));
                &payload[..max_payload_size]
            }
            _ => &payload[..],
        };
        let report = benchmark::run(codec, payload, configuration.iterations(), configuration.log_interval(), &logger)?;
        logger.log(format!("Finished {}", codec));
        reports.push(report);
    }

    let report = Report::new(configuration.seed(), configuration.iterations(), reports);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{}", error);
        process::exit(1);
    }
}
