//! Identifier assigned to timer entries.

use core::fmt;

/// Identifier assigned to scheduled timer entries.
///
/// Identifiers are handed out in scheduling order, which is also the tie-breaker between timers
/// sharing an expiry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimerId(u64);

impl TimerId {
  /// Creates a new identifier.
  #[must_use]
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  /// Returns the raw value.
  #[must_use]
  pub const fn raw(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for TimerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "timer-{}", self.0)
  }
}
