//! FIFO callback executor with snapshot ticks and downstream chaining.

#[cfg(test)]
mod tests;

use alloc::{borrow::Cow, boxed::Box};
use core::{cell::RefCell, fmt};

use cadence_utils_rs::core::sync::RcShared;

use super::{ExecutorShared, LOG_ORIGIN, Task, TimerState, WeakExecutor};
use crate::core::{
  error::{ExecutorError, TaskError},
  logging::{LogLevel, Logger},
};

/// Cooperative executor owning a FIFO queue of callbacks.
///
/// A tick runs exactly the callbacks that were queued when it started; callbacks enqueued while
/// ticking wait for the next tick. Executors may be linked into an acyclic chain with
/// [`Executor::set_next`] so that [`Executor::run`] keeps going downstream once the local queue is
/// drained.
///
/// Handles are cheap to clone and all refer to the same queue.
#[derive(Clone)]
pub struct Executor {
  shared: RcShared<ExecutorShared>,
}

impl Executor {
  /// Creates an executor that does not log.
  #[must_use]
  pub fn new() -> Self {
    Self::with_logger(Logger::disabled())
  }

  /// Creates an executor reporting through `logger`.
  #[must_use]
  pub fn with_logger(logger: Logger) -> Self {
    Self::from_shared(RcShared::new(ExecutorShared::new(None, logger)))
  }

  pub(crate) fn with_timers(timers: RcShared<RefCell<TimerState>>, logger: Logger) -> Self {
    Self::from_shared(RcShared::new(ExecutorShared::new(Some(timers), logger)))
  }

  pub(crate) const fn from_shared(shared: RcShared<ExecutorShared>) -> Self {
    Self { shared }
  }

  pub(crate) const fn shared(&self) -> &RcShared<ExecutorShared> {
    &self.shared
  }

  /// Appends an infallible callback to the queue.
  pub fn next_tick<F>(&self, callback: F)
  where
    F: FnOnce() + 'static, {
    self.shared.push(Box::new(move || {
      callback();
      Ok(())
    }));
  }

  /// Appends a callback whose failure aborts the tick that runs it.
  pub fn try_next_tick<F>(&self, callback: F)
  where
    F: FnOnce() -> Result<(), TaskError> + 'static, {
    self.shared.push(Box::new(callback));
  }

  /// Appends an already boxed task.
  pub fn enqueue(&self, task: Task) {
    self.shared.push(task);
  }

  /// Runs the callbacks queued at entry and returns how many ran.
  ///
  /// # Errors
  ///
  /// Returns [`ExecutorError::TaskFailed`] when a callback fails. The callbacks of the same
  /// snapshot that had not run yet are put back at the head of the queue, ahead of callbacks that
  /// were enqueued during the tick.
  pub fn tick(&self) -> Result<usize, ExecutorError> {
    self.shared.tick()
  }

  /// Drives this executor, its timers and its downstream chain until no work remains.
  ///
  /// While this executor has pending work it is stepped (a tick if callbacks are queued,
  /// otherwise the next timer batch). Once it is idle, the first downstream executor with pending
  /// work is stepped and the loop starts over.
  ///
  /// # Errors
  ///
  /// Propagates the first callback failure; remaining work stays queued.
  pub fn run(&self) -> Result<(), ExecutorError> {
    loop {
      if self.shared.step()? {
        continue;
      }
      match self.first_pending_downstream() {
        | Some(node) => {
          node.shared.step()?;
        },
        | None => return Ok(()),
      }
    }
  }

  fn first_pending_downstream(&self) -> Option<Executor> {
    let mut cursor = self.next();
    while let Some(node) = cursor {
      if node.has_pending() {
        return Some(node);
      }
      cursor = node.next();
    }
    None
  }

  /// Links `next` downstream of this executor.
  ///
  /// # Errors
  ///
  /// Returns [`ExecutorError::CycleDetected`] when `next` is this executor or already reaches it
  /// through its own chain. The existing link is left untouched in that case.
  pub fn set_next(&self, next: &Executor) -> Result<(), ExecutorError> {
    let mut cursor = Some(next.clone());
    while let Some(node) = cursor {
      if node.ptr_eq(self) {
        self.log(LogLevel::Warn, format_args!("rejected executor link that would form a cycle"));
        return Err(ExecutorError::CycleDetected);
      }
      cursor = node.next();
    }
    self.shared.set_next(Some(next.shared.downgrade()));
    Ok(())
  }

  /// Removes the downstream link.
  pub fn clear_next(&self) {
    self.shared.set_next(None);
  }

  /// Returns the downstream executor, if linked and still alive.
  #[must_use]
  pub fn next(&self) -> Option<Executor> {
    self.shared.next().map(Self::from_shared)
  }

  /// Returns the number of queued callbacks.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.shared.queued()
  }

  /// Returns `true` when callbacks or live timers are waiting.
  #[must_use]
  pub fn has_pending(&self) -> bool {
    self.shared.has_pending()
  }

  /// Returns the number of ticks that ran at least one callback.
  #[must_use]
  pub fn tick_count(&self) -> u64 {
    self.shared.tick_count()
  }

  /// Returns `true` when this executor owns a timer queue.
  #[must_use]
  pub fn is_scheduled(&self) -> bool {
    self.shared.is_scheduled()
  }

  /// Returns the logger shared with components running on this executor.
  #[must_use]
  pub fn logger(&self) -> &Logger {
    self.shared.logger()
  }

  /// Returns a non-owning handle.
  #[must_use]
  pub fn downgrade(&self) -> WeakExecutor {
    WeakExecutor::from_shared(self.shared.downgrade())
  }

  /// Returns `true` when both handles refer to the same executor.
  #[must_use]
  pub fn ptr_eq(&self, other: &Executor) -> bool {
    self.shared.ptr_eq(&other.shared)
  }

  pub(crate) fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) {
    self.shared.log(level, LOG_ORIGIN, message);
  }

  pub(crate) fn log_as(&self, level: LogLevel, origin: impl Into<Cow<'static, str>>, message: fmt::Arguments<'_>) {
    self.shared.logger().log(level, origin, self.tick_count(), message);
  }
}

impl Default for Executor {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Executor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Executor")
      .field("pending", &self.pending())
      .field("timers", &self.shared.pending_timers())
      .field("tick_count", &self.tick_count())
      .finish()
  }
}
