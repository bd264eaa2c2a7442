//! Level-filtering front end shared by every runtime component.

#[cfg(test)]
mod tests;

use alloc::{borrow::Cow, rc::Rc};
use core::fmt;

use cadence_utils_rs::core::sync::RcShared;

use super::{LogEvent, LogLevel, LoggerWriter};

/// Filters log events by severity and forwards the rest to a writer.
///
/// Cloning a logger shares the underlying writer.
#[derive(Clone)]
pub struct Logger {
  level:  LogLevel,
  writer: Option<RcShared<dyn LoggerWriter>>,
}

impl Logger {
  /// Creates a logger forwarding events at or above `level` to `writer`.
  #[must_use]
  pub fn new<W: LoggerWriter + 'static>(level: LogLevel, writer: W) -> Self {
    let writer: Rc<dyn LoggerWriter> = Rc::new(writer);
    Self { level, writer: Some(RcShared::from_rc(writer)) }
  }

  /// Creates a logger that drops every event.
  #[must_use]
  pub const fn disabled() -> Self {
    Self { level: LogLevel::Error, writer: None }
  }

  /// Returns the minimum severity forwarded to the writer.
  #[must_use]
  pub const fn level(&self) -> LogLevel {
    self.level
  }

  /// Returns a copy of this logger using a different threshold.
  #[must_use]
  pub fn with_level(&self, level: LogLevel) -> Self {
    Self { level, writer: self.writer.clone() }
  }

  /// Returns `true` when an event at `level` would reach the writer.
  #[must_use]
  pub const fn is_enabled(&self, level: LogLevel) -> bool {
    self.writer.is_some() && level as u8 >= self.level as u8
  }

  /// Formats and writes an event when `level` passes the threshold.
  pub fn log(&self, level: LogLevel, origin: impl Into<Cow<'static, str>>, tick: u64, message: fmt::Arguments<'_>) {
    if !self.is_enabled(level) {
      return;
    }
    if let Some(writer) = &self.writer {
      writer.write(&LogEvent::new(level, origin, alloc::fmt::format(message), tick));
    }
  }
}

impl Default for Logger {
  fn default() -> Self {
    Self::disabled()
  }
}

impl fmt::Debug for Logger {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Logger").field("level", &self.level).field("enabled", &self.writer.is_some()).finish()
  }
}
