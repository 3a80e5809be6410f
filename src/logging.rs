#![cfg(feature = "std")]

use std::env;

use log::{LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the default log level.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

/// Install the stderr logger.
///
/// `level` wins if given; otherwise the level is read from `SEA_BATTLE_LOG`,
/// falling back to `warn` so log lines do not interleave with the prompts.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level
        .or_else(|| env::var(LOG_ENV).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
