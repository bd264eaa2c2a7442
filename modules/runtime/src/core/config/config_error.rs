use core::fmt;

/// Error raised when an actor system configuration is unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
  /// The system name is empty.
  EmptySystemName,
  /// Mailboxes would never dispatch a message.
  ZeroThroughput,
  /// The dead-letter log could not hold a single entry.
  ZeroDeadLetterCapacity,
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::EmptySystemName => write!(f, "system name must not be empty"),
      | Self::ZeroThroughput => write!(f, "mailbox throughput must be at least 1"),
      | Self::ZeroDeadLetterCapacity => write!(f, "dead letter capacity must be at least 1"),
    }
  }
}

impl core::error::Error for ConfigError {}
