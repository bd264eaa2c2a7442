//! Actor system configuration API.

use alloc::string::{String, ToString};

use super::ConfigError;
use crate::core::logging::LogLevel;

#[cfg(test)]
mod tests;

/// Configuration for the actor system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorSystemConfig {
  system_name:          String,
  throughput:           usize,
  dead_letter_capacity: usize,
  log_level:            LogLevel,
}

impl ActorSystemConfig {
  /// Sets the actor system name.
  #[must_use]
  pub fn with_system_name(mut self, name: impl Into<String>) -> Self {
    self.system_name = name.into();
    self
  }

  /// Sets how many messages a mailbox dispatches per tick.
  #[must_use]
  pub const fn with_throughput(mut self, throughput: usize) -> Self {
    self.throughput = throughput;
    self
  }

  /// Sets how many dead letters are retained.
  #[must_use]
  pub const fn with_dead_letter_capacity(mut self, capacity: usize) -> Self {
    self.dead_letter_capacity = capacity;
    self
  }

  /// Sets the minimum level of events emitted by actors and the system.
  #[must_use]
  pub const fn with_log_level(mut self, level: LogLevel) -> Self {
    self.log_level = level;
    self
  }

  /// Returns the system name.
  #[must_use]
  pub fn system_name(&self) -> &str {
    &self.system_name
  }

  /// Returns the per-tick message budget of a mailbox.
  #[must_use]
  pub const fn throughput(&self) -> usize {
    self.throughput
  }

  /// Returns the dead-letter log capacity.
  #[must_use]
  pub const fn dead_letter_capacity(&self) -> usize {
    self.dead_letter_capacity
  }

  /// Returns the minimum log level.
  #[must_use]
  pub const fn log_level(&self) -> LogLevel {
    self.log_level
  }

  /// Checks that the configuration can drive an actor system.
  ///
  /// # Errors
  ///
  /// Returns the first [`ConfigError`] found.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.system_name.is_empty() {
      return Err(ConfigError::EmptySystemName);
    }
    if self.throughput == 0 {
      return Err(ConfigError::ZeroThroughput);
    }
    if self.dead_letter_capacity == 0 {
      return Err(ConfigError::ZeroDeadLetterCapacity);
    }
    Ok(())
  }
}

impl Default for ActorSystemConfig {
  fn default() -> Self {
    Self {
      system_name:          "cadence".to_string(),
      throughput:           64,
      dead_letter_capacity: 256,
      log_level:            LogLevel::Info,
    }
  }
}
