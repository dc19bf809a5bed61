// src/utils/logger.rs

use log::{Level, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

pub fn init() -> Result<(), SetLoggerError> {
  log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Debug))
}

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= Level::Debug
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let icon = match record.level() {
        Level::Error => "🔴",
        Level::Warn => "🟠",
        Level::Info => "🔵",
        Level::Debug => "⚪",
        Level::Trace => "▫️",
      };

      // Format: "🔴  Element not found"
      let _ = writeln!(std::io::stderr(), "{}  {}", icon, record.args());
    }
  }

  fn flush(&self) {
    let _ = std::io::stderr().flush();
  }
}
