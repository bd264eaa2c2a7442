
use alloc::collections::VecDeque;

use super::DispatchPolicy;
use crate::core::actor::Pid;

/// FIFO dispatch: mailboxes are ticked in the order they became runnable.
#[derive(Debug, Default)]
pub struct RoundRobinPolicy {
  queue: VecDeque<Pid>,
}

impl RoundRobinPolicy {
  /// Creates an empty policy.
  #[must_use]
  pub const fn new() -> Self {
    Self { queue: VecDeque::new() }
  }
}

impl DispatchPolicy for RoundRobinPolicy {
  fn enqueue(&mut self, pid: Pid) {
    self.queue.push_back(pid);
  }

  fn next(&mut self) -> Option<Pid> {
    self.queue.pop_front()
  }

  fn len(&self) -> usize {
    self.queue.len()
  }
}
