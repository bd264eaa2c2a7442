use crate::core::actor::Pid;

/// Order in which runnable mailboxes are ticked.
///
/// A mailbox is enqueued at most once until it has been handed out again.
pub trait DispatchPolicy {
  /// Marks `pid` runnable.
  fn enqueue(&mut self, pid: Pid);

  /// Returns the next mailbox to tick.
  fn next(&mut self) -> Option<Pid>;

  /// Returns the number of runnable mailboxes.
  fn len(&self) -> usize;

  /// Returns `true` when nothing is runnable.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
