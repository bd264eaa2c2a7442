//! Monotonic wall-clock implementation of [`TimerClock`].

extern crate std;

use core::time::Duration;
use std::{thread, time::Instant};

use crate::core::time::{ClockKind, TimerClock};


/// Real-time clock with millisecond precision backed by [`Instant`].
///
/// Time is measured from the moment the clock was created. Waiting for a deadline blocks the
/// calling thread, which is the only thread the runtime ever uses.
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
  origin: Instant,
}

impl StdClock {
  /// Creates a clock whose time zero is now.
  #[must_use]
  pub fn new() -> Self {
    Self { origin: Instant::now() }
  }

  fn elapsed_millis(&self) -> u64 {
    u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
  }
}

impl Default for StdClock {
  fn default() -> Self {
    Self::new()
  }
}

impl TimerClock for StdClock {
  fn now(&self) -> u64 {
    self.elapsed_millis()
  }

  fn wait_until(&mut self, deadline: u64) {
    loop {
      let now = self.elapsed_millis();
      if now >= deadline {
        return;
      }
      thread::sleep(Duration::from_millis(deadline - now));
    }
  }

  fn kind(&self) -> ClockKind {
    ClockKind::Realtime
  }
}
