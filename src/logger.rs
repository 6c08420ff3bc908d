use crate::Chronometer;
use std::fmt::Display;

/// Progress lines go to stderr so that stdout only carries the report.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
        }
    }

    pub fn log(&self, value: impl Display) {
        eprintln!("{} ({} elapsed)", value, self.chronometer);
    }
}

/// Forwards one call out of every `interval` to the underlying logger.
#[derive(Clone, Copy)]
pub struct PartialLogger<'a> {
    index: usize,
    interval: usize,
    logger: &'a Logger,
}

impl<'a> PartialLogger<'a> {
    pub fn new(interval: usize, logger: &'a Logger) -> Self {
        Self {
            index: 0,
            interval,
            logger,
        }
    }

    pub fn log<D: Display>(&mut self, f: impl FnOnce(usize) -> D) {
        if self.index % self.interval == 0 {
            self.logger.log(f(self.index));
        }
        self.index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{Logger, PartialLogger};

    #[test]
    fn partial_logger() {
        let logger = Logger::new();
        let mut partial_logger = PartialLogger::new(3, &logger);
        let mut logged = Vec::new();
        for _ in 0..8 {
            partial_logger.log(|index| {
                logged.push(index);
                index
            });
        }
        assert_eq!(logged, vec![0, 3, 6]);
    }
}
