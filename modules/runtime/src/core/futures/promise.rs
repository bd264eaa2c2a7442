//! Tri-state asynchronous value whose continuations run on an executor.


use alloc::{boxed::Box, vec, vec::Vec};
use core::{
  cell::{Cell, RefCell},
  fmt, mem,
};

use cadence_utils_rs::core::sync::RcShared;

use super::{LOG_ORIGIN, PromiseError, PromiseStateError, PromiseStatus, Resolution, Settlement};
use crate::core::{
  dispatch::{Executor, ScheduledExecutor, WeakExecutor},
  logging::LogLevel,
};

type ResolveCallback<T> = Box<dyn FnOnce(T)>;
type RejectCallback = Box<dyn FnOnce(PromiseError)>;

struct PromiseCell<T> {
  settlement: Settlement<T>,
  adopted:    bool,
  on_resolve: Vec<ResolveCallback<T>>,
  on_reject:  Vec<RejectCallback>,
}

/// Asynchronous value that is settled at most once.
///
/// Every notification of a registered handler is delivered as a separate callback on the
/// promise's executor, never inline in the call that settled the promise or registered the
/// handler. Handlers registered on one promise are notified in registration order.
///
/// A promise may adopt another promise with [`Promise::adopt`]; it is then locked and settles
/// exactly as the adopted promise does.
pub struct Promise<T> {
  cell:     RcShared<RefCell<PromiseCell<T>>>,
  executor: WeakExecutor,
}

impl<T> Clone for Promise<T> {
  fn clone(&self) -> Self {
    Self { cell: self.cell.clone(), executor: self.executor.clone() }
  }
}

impl<T: Clone + 'static> Promise<T> {
  /// Creates a pending promise bound to `executor`.
  #[must_use]
  pub fn new(executor: &Executor) -> Self {
    Self::attached(executor.downgrade(), Settlement::Pending)
  }

  /// Creates a promise already resolved with `value`.
  #[must_use]
  pub fn resolved(executor: &Executor, value: T) -> Self {
    Self::attached(executor.downgrade(), Settlement::Resolved(value))
  }

  /// Creates a promise already rejected with `error`.
  #[must_use]
  pub fn rejected(executor: &Executor, error: PromiseError) -> Self {
    Self::attached(executor.downgrade(), Settlement::Rejected(error))
  }

  fn attached(executor: WeakExecutor, settlement: Settlement<T>) -> Self {
    let cell = PromiseCell { settlement, adopted: false, on_resolve: Vec::new(), on_reject: Vec::new() };
    Self { cell: RcShared::new(RefCell::new(cell)), executor }
  }

  /// Returns the current status.
  #[must_use]
  pub fn status(&self) -> PromiseStatus {
    self.cell.borrow().settlement.status()
  }

  /// Returns `true` while the promise is in progress.
  #[must_use]
  pub fn is_pending(&self) -> bool {
    self.status() == PromiseStatus::InProgress
  }

  /// Returns `true` once the promise follows another promise.
  #[must_use]
  pub fn is_adopted(&self) -> bool {
    self.cell.borrow().adopted
  }

  /// Returns the resolved value, if any.
  #[must_use]
  pub fn value(&self) -> Option<T> {
    match &self.cell.borrow().settlement {
      | Settlement::Resolved(value) => Some(value.clone()),
      | _ => None,
    }
  }

  /// Returns the rejection reason, if any.
  #[must_use]
  pub fn error(&self) -> Option<PromiseError> {
    match &self.cell.borrow().settlement {
      | Settlement::Rejected(error) => Some(error.clone()),
      | _ => None,
    }
  }

  /// Returns `true` when both handles refer to the same promise.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    self.cell.ptr_eq(&other.cell)
  }

  /// Resolves the promise with `value`.
  ///
  /// # Errors
  ///
  /// Returns [`PromiseStateError::AlreadySettled`] when the promise is no longer in progress and
  /// [`PromiseStateError::AlreadyAdopted`] when it follows another promise.
  pub fn resolve(&self, value: T) -> Result<(), PromiseStateError> {
    self.settle(Settlement::Resolved(value), false)
  }

  /// Rejects the promise with `error`.
  ///
  /// # Errors
  ///
  /// Same conditions as [`Promise::resolve`].
  pub fn reject(&self, error: PromiseError) -> Result<(), PromiseStateError> {
    self.settle(Settlement::Rejected(error), false)
  }

  /// Locks this promise to `other`: it settles with whatever `other` settles with.
  ///
  /// Adopting itself rejects the promise with [`PromiseError::Cycle`].
  ///
  /// # Errors
  ///
  /// Returns [`PromiseStateError`] when this promise is already settled or already adopting.
  pub fn adopt(&self, other: &Promise<T>) -> Result<(), PromiseStateError> {
    if self.ptr_eq(other) {
      self.log(LogLevel::Warn, format_args!("promise asked to adopt itself"));
      return self.reject(PromiseError::Cycle);
    }
    {
      let mut cell = self.cell.borrow_mut();
      let status = cell.settlement.status();
      if status != PromiseStatus::InProgress {
        return Err(PromiseStateError::AlreadySettled(status));
      }
      if cell.adopted {
        return Err(PromiseStateError::AlreadyAdopted);
      }
      cell.adopted = true;
    }
    let on_value = self.clone();
    let on_error = self.clone();
    other.subscribe(
      Box::new(move |value| on_value.settle_logged(Settlement::Resolved(value), true)),
      Box::new(move |error| on_error.settle_logged(Settlement::Rejected(error), true)),
    );
    Ok(())
  }

  /// Registers a pair of handlers and returns the promise they settle.
  ///
  /// Exactly one handler runs. Its `Ok` outcome resolves (or adopts into) the derived promise;
  /// its `Err` outcome rejects it.
  pub fn then<U, F, G>(&self, on_fulfilled: F, on_rejected: G) -> Promise<U>
  where
    U: Clone + 'static,
    F: FnOnce(T) -> Result<Resolution<U>, PromiseError> + 'static,
    G: FnOnce(PromiseError) -> Result<Resolution<U>, PromiseError> + 'static, {
    let derived = Promise::attached(self.executor.clone(), Settlement::Pending);
    let fulfilled = derived.clone();
    let rejected = derived.clone();
    self.subscribe(
      Box::new(move |value| fulfilled.follow(on_fulfilled(value))),
      Box::new(move |error| rejected.follow(on_rejected(error))),
    );
    derived
  }

  /// Transforms the value; rejections pass through.
  pub fn map<U, F>(&self, f: F) -> Promise<U>
  where
    U: Clone + 'static,
    F: FnOnce(T) -> U + 'static, {
    self.then(move |value| Ok(Resolution::Value(f(value))), Err)
  }

  /// Transforms the value with a fallible handler; an `Err` rejects the derived promise.
  pub fn try_map<U, F>(&self, f: F) -> Promise<U>
  where
    U: Clone + 'static,
    F: FnOnce(T) -> Result<U, PromiseError> + 'static, {
    self.then(move |value| f(value).map(Resolution::Value), Err)
  }

  /// Chains a handler returning another promise; the derived promise adopts it.
  pub fn and_then<U, F>(&self, f: F) -> Promise<U>
  where
    U: Clone + 'static,
    F: FnOnce(T) -> Promise<U> + 'static, {
    self.then(move |value| Ok(Resolution::Adopt(f(value))), Err)
  }

  /// Handles a rejection; values pass through.
  pub fn catch<F>(&self, f: F) -> Promise<T>
  where
    F: FnOnce(PromiseError) -> Result<Resolution<T>, PromiseError> + 'static, {
    self.then(|value| Ok(Resolution::Value(value)), f)
  }

  /// Replaces a rejection with a fallback value.
  pub fn recover<F>(&self, f: F) -> Promise<T>
  where
    F: FnOnce(PromiseError) -> T + 'static, {
    self.catch(move |error| Ok(Resolution::Value(f(error))))
  }

  /// Returns a promise that settles like this one unless `delay` elapses first, in which case it
  /// is rejected with [`PromiseError::TimedOut`].
  ///
  /// Settling this promise first cancels the timer.
  pub fn timeout(&self, delay: u64, scheduler: &ScheduledExecutor) -> Promise<T> {
    let derived = Promise::attached(self.executor.clone(), Settlement::Pending);
    let expired = derived.clone();
    let timer = scheduler.schedule_delayed(
      move || {
        if expired.is_pending() {
          expired.log(LogLevel::Debug, format_args!("timed out after {delay}"));
          expired.settle_logged(Settlement::Rejected(PromiseError::TimedOut { delay }), false);
        }
      },
      delay,
    );

    let (fulfilled, rejected) = (derived.clone(), derived.clone());
    let (value_timers, error_timers) = (scheduler.downgrade(), scheduler.downgrade());
    self.subscribe(
      Box::new(move |value| {
        if let Some(executor) = value_timers.upgrade() {
          executor.shared().cancel(timer);
        }
        if fulfilled.is_pending() {
          fulfilled.settle_logged(Settlement::Resolved(value), false);
        }
      }),
      Box::new(move |error| {
        if let Some(executor) = error_timers.upgrade() {
          executor.shared().cancel(timer);
        }
        if rejected.is_pending() {
          rejected.settle_logged(Settlement::Rejected(error), false);
        }
      }),
    );
    derived
  }

  /// Returns a promise resolved with `value` once `delay` has elapsed on `scheduler`.
  pub fn delay(value: T, delay: u64, scheduler: &ScheduledExecutor) -> Promise<T> {
    let promise = Self::new(scheduler);
    let target = promise.clone();
    scheduler.schedule_delayed(move || target.settle_logged(Settlement::Resolved(value), false), delay);
    promise
  }

  /// Returns a promise resolved with every value in input order, or rejected with the first
  /// rejection.
  pub fn all(executor: &Executor, promises: &[Promise<T>]) -> Promise<Vec<T>> {
    let combined = Promise::new(executor);
    if promises.is_empty() {
      combined.settle_logged(Settlement::Resolved(Vec::new()), false);
      return combined;
    }
    let slots: RcShared<RefCell<Vec<Option<T>>>> = RcShared::new(RefCell::new(vec![None; promises.len()]));
    let remaining = RcShared::new(Cell::new(promises.len()));
    for (index, promise) in promises.iter().enumerate() {
      let on_value = {
        let (combined, slots, remaining) = (combined.clone(), slots.clone(), remaining.clone());
        move |value: T| {
          slots.borrow_mut()[index] = Some(value);
          remaining.set(remaining.get().saturating_sub(1));
          if remaining.get() == 0 && combined.is_pending() {
            let values = slots.borrow_mut().drain(..).flatten().collect();
            combined.settle_logged(Settlement::Resolved(values), false);
          }
        }
      };
      let on_error = {
        let combined = combined.clone();
        move |error: PromiseError| {
          if combined.is_pending() {
            combined.settle_logged(Settlement::Rejected(error), false);
          }
        }
      };
      promise.subscribe(Box::new(on_value), Box::new(on_error));
    }
    combined
  }

  /// Registers raw callbacks. On a settled promise the matching callback is scheduled right away.
  fn subscribe(&self, on_resolve: ResolveCallback<T>, on_reject: RejectCallback) {
    let mut cell = self.cell.borrow_mut();
    let settled = match &cell.settlement {
      | Settlement::Pending => None,
      | Settlement::Resolved(value) => Some(Ok(value.clone())),
      | Settlement::Rejected(error) => Some(Err(error.clone())),
    };
    match settled {
      | None => {
        cell.on_resolve.push(on_resolve);
        cell.on_reject.push(on_reject);
      },
      | Some(Ok(value)) => {
        drop(cell);
        self.dispatch(move || on_resolve(value));
      },
      | Some(Err(error)) => {
        drop(cell);
        self.dispatch(move || on_reject(error));
      },
    }
  }

  fn settle(&self, settlement: Settlement<T>, via_adoption: bool) -> Result<(), PromiseStateError> {
    let (on_resolve, on_reject) = {
      let mut cell = self.cell.borrow_mut();
      let status = cell.settlement.status();
      if status != PromiseStatus::InProgress {
        return Err(PromiseStateError::AlreadySettled(status));
      }
      if cell.adopted && !via_adoption {
        return Err(PromiseStateError::AlreadyAdopted);
      }
      cell.settlement = settlement.clone();
      (mem::take(&mut cell.on_resolve), mem::take(&mut cell.on_reject))
    };
    match settlement {
      | Settlement::Resolved(value) => {
        for callback in on_resolve {
          let value = value.clone();
          self.dispatch(move || callback(value));
        }
      },
      | Settlement::Rejected(error) => {
        for callback in on_reject {
          let error = error.clone();
          self.dispatch(move || callback(error));
        }
      },
      | Settlement::Pending => {},
    }
    Ok(())
  }

  fn settle_logged(&self, settlement: Settlement<T>, via_adoption: bool) {
    if let Err(error) = self.settle(settlement, via_adoption) {
      self.log(LogLevel::Warn, format_args!("dropped settlement: {error}"));
    }
  }

  fn follow(&self, outcome: Result<Resolution<T>, PromiseError>) {
    let result = match outcome {
      | Ok(Resolution::Value(value)) => self.resolve(value),
      | Ok(Resolution::Adopt(promise)) => self.adopt(&promise),
      | Err(error) => self.reject(error),
    };
    if let Err(error) = result {
      self.log(LogLevel::Warn, format_args!("handler outcome dropped: {error}"));
    }
  }

  fn dispatch<F>(&self, task: F)
  where
    F: FnOnce() + 'static, {
    if let Some(executor) = self.executor.upgrade() {
      executor.next_tick(task);
    }
  }

  fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) {
    if let Some(executor) = self.executor.upgrade() {
      executor.log_as(level, LOG_ORIGIN, message);
    }
  }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Promise<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let cell = self.cell.borrow();
    let mut debug = f.debug_struct("Promise");
    match &cell.settlement {
      | Settlement::Pending => debug.field("status", &PromiseStatus::InProgress),
      | Settlement::Resolved(value) => debug.field("value", value),
      | Settlement::Rejected(error) => debug.field("error", error),
    };
    debug.field("adopted", &cell.adopted).finish()
  }
}
