use alloc::boxed::Box;

use cadence_utils_rs::core::time::{TimerClock, TimerId, TimerQueue};

use super::Task;

/// Timer queue together with the clock that drives it.
pub(crate) struct TimerState {
  pub(crate) queue: TimerQueue<Task>,
  pub(crate) clock: Box<dyn TimerClock>,
}

impl TimerState {
  pub(crate) fn new(clock: Box<dyn TimerClock>) -> Self {
    Self { queue: TimerQueue::new(), clock }
  }

  /// Queues `task` to expire `delay` units from now; delays below one count as one.
  pub(crate) fn schedule(&mut self, delay: u64, task: Task) -> TimerId {
    let expiry = self.clock.now().saturating_add(delay.max(1));
    self.queue.schedule(expiry, task)
  }
}
