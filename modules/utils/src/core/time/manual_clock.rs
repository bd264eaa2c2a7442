//! Logical clock advanced explicitly by the executor.

use super::{ClockKind, TimerClock};

#[cfg(test)]
mod tests;

/// Simulated clock that jumps straight to the requested deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
  now: u64,
}

impl ManualClock {
  /// Creates a clock starting at tick zero.
  #[must_use]
  pub const fn new() -> Self {
    Self { now: 0 }
  }

  /// Creates a clock starting at the provided tick.
  #[must_use]
  pub const fn starting_at(now: u64) -> Self {
    Self { now }
  }

  /// Moves the clock forward by `ticks`.
  pub const fn advance(&mut self, ticks: u64) {
    self.now = self.now.saturating_add(ticks);
  }
}

impl TimerClock for ManualClock {
  fn now(&self) -> u64 {
    self.now
  }

  fn wait_until(&mut self, deadline: u64) {
    if deadline > self.now {
      self.now = deadline;
    }
  }

  fn kind(&self) -> ClockKind {
    ClockKind::Logical
  }
}
