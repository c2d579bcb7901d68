/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::env;

struct Logger;

static LOGGER: Logger = Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let prefix = match record.level() {
            Level::Error | Level::Warn => "\x1b[31;1m* ",
            Level::Info | Level::Debug => "\x1b[33;2m* ",
            Level::Trace => "\x1b[36;2m! ",
        };
        println!("{prefix}{}\x1b[0m", record.args());
    }

    fn flush(&self) {}
}

fn level_from_env() -> LevelFilter {
    match env::var("RUST_LOG") {
        Ok(value) => match value.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Off,
        },
        Err(_) => LevelFilter::Off,
    }
}

/// Installs the logger with the level named in `RUST_LOG`.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_from_env());
    }
}
