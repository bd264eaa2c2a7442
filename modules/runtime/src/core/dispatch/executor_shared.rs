//! State shared by every handle of one executor.

use alloc::collections::VecDeque;
use core::{
  cell::{Cell, RefCell},
  fmt, mem,
};

use cadence_utils_rs::core::{
  sync::{RcShared, WeakShared},
  time::TimerId,
};

use super::{LOG_ORIGIN, Task, TimerState};
use crate::core::{
  error::ExecutorError,
  logging::{LogLevel, Logger},
};

pub(crate) struct ExecutorShared {
  queue:      RefCell<VecDeque<Task>>,
  next:       RefCell<Option<WeakShared<ExecutorShared>>>,
  timers:     Option<RcShared<RefCell<TimerState>>>,
  tick_count: Cell<u64>,
  logger:     Logger,
}

impl ExecutorShared {
  pub(crate) fn new(timers: Option<RcShared<RefCell<TimerState>>>, logger: Logger) -> Self {
    Self {
      queue: RefCell::new(VecDeque::new()),
      next: RefCell::new(None),
      timers,
      tick_count: Cell::new(0),
      logger,
    }
  }

  pub(crate) fn push(&self, task: Task) {
    self.queue.borrow_mut().push_back(task);
  }

  pub(crate) fn queued(&self) -> usize {
    self.queue.borrow().len()
  }

  pub(crate) fn pending_timers(&self) -> usize {
    self.timers.as_ref().map_or(0, |timers| timers.borrow().queue.len())
  }

  pub(crate) fn has_pending(&self) -> bool {
    self.queued() > 0 || self.pending_timers() > 0
  }

  pub(crate) const fn is_scheduled(&self) -> bool {
    self.timers.is_some()
  }

  pub(crate) fn tick_count(&self) -> u64 {
    self.tick_count.get()
  }

  pub(crate) const fn logger(&self) -> &Logger {
    &self.logger
  }

  pub(crate) fn log(&self, level: LogLevel, origin: &'static str, message: fmt::Arguments<'_>) {
    self.logger.log(level, origin, self.tick_count(), message);
  }

  pub(crate) fn next(&self) -> Option<RcShared<ExecutorShared>> {
    self.next.borrow().as_ref().and_then(WeakShared::upgrade)
  }

  pub(crate) fn set_next(&self, next: Option<WeakShared<ExecutorShared>>) {
    *self.next.borrow_mut() = next;
  }

  /// Runs the callbacks queued at entry. Callbacks enqueued meanwhile wait for the next tick.
  pub(crate) fn tick(&self) -> Result<usize, ExecutorError> {
    let snapshot = mem::take(&mut *self.queue.borrow_mut());
    if snapshot.is_empty() {
      return Ok(0);
    }
    let tick = self.tick_count.get() + 1;
    self.tick_count.set(tick);
    self.log(LogLevel::Trace, LOG_ORIGIN, format_args!("tick {tick} runs {} callbacks", snapshot.len()));

    let mut remaining = snapshot.into_iter();
    let mut executed = 0;
    while let Some(task) = remaining.next() {
      executed += 1;
      if let Err(error) = task() {
        let mut queue = self.queue.borrow_mut();
        let newer = mem::take(&mut *queue);
        queue.extend(remaining);
        queue.extend(newer);
        drop(queue);
        self.log(LogLevel::Error, LOG_ORIGIN, format_args!("callback failed in tick {tick}: {error}"));
        return Err(ExecutorError::TaskFailed(error));
      }
    }
    Ok(executed)
  }

  /// Advances the clock to the earliest expiry and fires every timer due at it.
  ///
  /// Returns `Ok(false)` when no timer is pending.
  pub(crate) fn fire_timers(&self) -> Result<bool, ExecutorError> {
    let Some(timers) = &self.timers else {
      return Ok(false);
    };
    let expiry = {
      let mut state = timers.borrow_mut();
      let Some(expiry) = state.queue.next_expiry() else {
        return Ok(false);
      };
      state.clock.wait_until(expiry);
      expiry
    };
    self.log(LogLevel::Trace, LOG_ORIGIN, format_args!("time advanced to {expiry}"));

    loop {
      let due = timers.borrow_mut().queue.pop_due(expiry);
      let Some((id, task)) = due else {
        return Ok(true);
      };
      if let Err(error) = task() {
        self.log(LogLevel::Error, LOG_ORIGIN, format_args!("{id} failed at {expiry}: {error}"));
        return Err(ExecutorError::TaskFailed(error));
      }
    }
  }

  /// Runs one unit of work: a tick when callbacks are queued, otherwise the next timer batch.
  pub(crate) fn step(&self) -> Result<bool, ExecutorError> {
    if self.queued() > 0 {
      self.tick()?;
      return Ok(true);
    }
    self.fire_timers()
  }

  pub(crate) fn timers(&self) -> Option<RcShared<RefCell<TimerState>>> {
    self.timers.clone()
  }

  pub(crate) fn cancel(&self, id: TimerId) -> bool {
    self.timers.as_ref().is_some_and(|timers| timers.borrow_mut().queue.cancel(id))
  }
}
