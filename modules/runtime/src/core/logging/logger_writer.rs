//! Trait implemented by logging sinks consuming log events.

use cadence_utils_rs::core::sync::RcShared;

use crate::core::logging::LogEvent;

/// Interface for log event writers.
pub trait LoggerWriter {
  /// Writes the provided event to the underlying sink.
  fn write(&self, event: &LogEvent);
}

impl<W: LoggerWriter + ?Sized> LoggerWriter for RcShared<W> {
  fn write(&self, event: &LogEvent) {
    (**self).write(event);
  }
}
