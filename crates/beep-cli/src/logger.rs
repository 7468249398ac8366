//! Console logger - prints log records to stderr, prefixed like the rest of
//! beep's output.

use log::{Level, Log, Metadata, Record};

pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_str = match record.level() {
            Level::Error => "Error",
            Level::Warn => "Warning",
            Level::Info => "Info",
            Level::Debug => "Debug",
            Level::Trace => "Trace",
        };
        let module = record
            .module_path()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or(record.target());
        eprintln!("beep: {}: {}: {}", level_str, module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

pub fn init(max_level: log::LevelFilter) {
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(max_level);
        }
        Err(_) => {
            // Logger already set
        }
    }
}
