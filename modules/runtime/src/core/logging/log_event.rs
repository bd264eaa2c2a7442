//! Event payload describing a log entry emitted by the runtime.

use alloc::{borrow::Cow, string::String};

use super::LogLevel;

/// Structured representation of a runtime log event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
  level:   LogLevel,
  origin:  Cow<'static, str>,
  message: String,
  tick:    u64,
}

impl LogEvent {
  /// Creates a new log event.
  #[must_use]
  pub fn new(level: LogLevel, origin: impl Into<Cow<'static, str>>, message: String, tick: u64) -> Self {
    Self { level, origin: origin.into(), message, tick }
  }

  /// Returns the severity level.
  #[must_use]
  pub const fn level(&self) -> LogLevel {
    self.level
  }

  /// Returns the component that emitted the event (`executor`, `promise`, `actor:<pid>`, ...).
  #[must_use]
  pub fn origin(&self) -> &str {
    &self.origin
  }

  /// Returns the log message.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }

  /// Returns the executor tick count at the time the event was emitted.
  #[must_use]
  pub const fn tick(&self) -> u64 {
    self.tick
  }
}
