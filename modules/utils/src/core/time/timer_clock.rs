//! Clock abstraction driving scheduled executors.

use super::ClockKind;

/// Source of time for a scheduled executor.
///
/// Times are opaque `u64` ticks: logical ticks for [`ClockKind::Logical`] clocks and milliseconds
/// since the clock was created for [`ClockKind::Realtime`] clocks. Both flavours must be
/// interchangeable: the executor only ever asks for the current time and waits for the earliest
/// pending deadline.
pub trait TimerClock {
  /// Returns the current time.
  fn now(&self) -> u64;

  /// Advances the clock until `deadline` has been reached.
  ///
  /// Deadlines in the past return immediately and never move the clock backwards.
  fn wait_until(&mut self, deadline: u64);

  /// Identifies the clock flavour.
  fn kind(&self) -> ClockKind;
}
