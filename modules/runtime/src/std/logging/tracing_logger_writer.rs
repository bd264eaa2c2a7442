//! `tracing`-backed log writer for standard environments.

extern crate std;

#[cfg(test)]
mod tests;

use tracing::{Level, event};

use crate::core::logging::{LogEvent, LogLevel, LoggerWriter};

/// Writer that forwards runtime log events to the `tracing` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLoggerWriter;

impl TracingLoggerWriter {
  /// Target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "cadence::runtime::log";

  /// Creates a writer.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl LoggerWriter for TracingLoggerWriter {
  fn write(&self, event: &LogEvent) {
    let origin = event.origin();
    let tick = event.tick();
    let message = event.message();

    match event.level() {
      | LogLevel::Trace => {
        event!(target: TracingLoggerWriter::DEFAULT_TARGET, Level::TRACE, origin = origin, tick = tick, "{}", message);
      },
      | LogLevel::Debug => {
        event!(target: TracingLoggerWriter::DEFAULT_TARGET, Level::DEBUG, origin = origin, tick = tick, "{}", message);
      },
      | LogLevel::Info => {
        event!(target: TracingLoggerWriter::DEFAULT_TARGET, Level::INFO, origin = origin, tick = tick, "{}", message);
      },
      | LogLevel::Warn => {
        event!(target: TracingLoggerWriter::DEFAULT_TARGET, Level::WARN, origin = origin, tick = tick, "{}", message);
      },
      | LogLevel::Error => {
        event!(target: TracingLoggerWriter::DEFAULT_TARGET, Level::ERROR, origin = origin, tick = tick, "{}", message);
      },
    }
  }
}
