/// Identifies how a [`TimerClock`](super::TimerClock) advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockKind {
  /// Simulated time that jumps instantly to the next deadline.
  Logical,
  /// Monotonic wall-clock time measured in milliseconds; advancing sleeps.
  Realtime,
}
