//! Executor extended with an expiry-ordered timer queue.


use alloc::boxed::Box;
use core::{cell::RefCell, fmt, ops::Deref};

use cadence_utils_rs::core::{
  sync::RcShared,
  time::{ClockKind, ManualClock, TimerClock, TimerId},
};

use super::{Executor, TimerState};
use crate::core::{
  error::{ExecutorError, TaskError},
  logging::{LogLevel, Logger},
};

/// Executor that also fires delayed callbacks in expiry order.
///
/// With the default [`ManualClock`] time is logical: when the callback queue is empty,
/// [`Executor::run`] jumps the clock straight to the earliest pending expiry and fires every timer
/// due at that instant, in scheduling order. Cancelling a timer from a callback of the same batch
/// prevents it from firing.
#[derive(Clone)]
pub struct ScheduledExecutor {
  executor: Executor,
  timers:   RcShared<RefCell<TimerState>>,
}

impl ScheduledExecutor {
  /// Creates a scheduled executor driven by a logical clock starting at zero.
  #[must_use]
  pub fn new() -> Self {
    Self::with_clock(ManualClock::new())
  }

  /// Creates a scheduled executor driven by `clock`.
  #[must_use]
  pub fn with_clock<C: TimerClock + 'static>(clock: C) -> Self {
    Self::with_clock_and_logger(clock, Logger::disabled())
  }

  /// Creates a scheduled executor driven by `clock` and reporting through `logger`.
  #[must_use]
  pub fn with_clock_and_logger<C: TimerClock + 'static>(clock: C, logger: Logger) -> Self {
    let timers = RcShared::new(RefCell::new(TimerState::new(Box::new(clock))));
    Self { executor: Executor::with_timers(timers.clone(), logger), timers }
  }

  /// Schedules `callback` to run `delay` time units from now.
  ///
  /// Delays below one are treated as one, so a timer never fires in the instant it was
  /// scheduled.
  pub fn schedule_delayed<F>(&self, callback: F, delay: u64) -> TimerId
  where
    F: FnOnce() + 'static, {
    self.try_schedule_delayed(
      move || {
        callback();
        Ok(())
      },
      delay,
    )
  }

  /// Schedules a fallible `callback`; its failure aborts the run that fires it.
  pub fn try_schedule_delayed<F>(&self, callback: F, delay: u64) -> TimerId
  where
    F: FnOnce() -> Result<(), TaskError> + 'static, {
    let id = self.timers.borrow_mut().schedule(delay, Box::new(callback));
    self.executor.shared().log(LogLevel::Trace, super::LOG_ORIGIN, format_args!("{id} scheduled after {delay}"));
    id
  }

  /// Cancels a pending timer. Returns `false` when it already fired or was cancelled.
  pub fn cancel_scheduled(&self, id: TimerId) -> bool {
    self.timers.borrow_mut().queue.cancel(id)
  }

  /// Returns the current time of the underlying clock.
  #[must_use]
  pub fn current_time(&self) -> u64 {
    self.timers.borrow().clock.now()
  }

  /// Returns the number of live timers.
  #[must_use]
  pub fn pending_timers(&self) -> usize {
    self.timers.borrow().queue.len()
  }

  /// Returns how the underlying clock advances.
  #[must_use]
  pub fn clock_kind(&self) -> ClockKind {
    self.timers.borrow().clock.kind()
  }

  /// Returns the plain executor handle.
  #[must_use]
  pub const fn executor(&self) -> &Executor {
    &self.executor
  }
}

impl Default for ScheduledExecutor {
  fn default() -> Self {
    Self::new()
  }
}

impl Deref for ScheduledExecutor {
  type Target = Executor;

  fn deref(&self) -> &Self::Target {
    &self.executor
  }
}

impl TryFrom<Executor> for ScheduledExecutor {
  type Error = ExecutorError;

  fn try_from(executor: Executor) -> Result<Self, Self::Error> {
    match executor.shared().timers() {
      | Some(timers) => Ok(Self { executor, timers }),
      | None => Err(ExecutorError::NotScheduled),
    }
  }
}

impl fmt::Debug for ScheduledExecutor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ScheduledExecutor")
      .field("now", &self.current_time())
      .field("clock", &self.clock_kind())
      .field("pending", &self.pending())
      .field("timers", &self.pending_timers())
      .finish()
  }
}
