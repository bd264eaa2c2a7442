use alloc::{rc::Rc, vec, vec::Vec};
use core::cell::{Cell, RefCell};

use super::Executor;
use crate::core::error::{ExecutorError, TaskError};

fn shared_log() -> Rc<RefCell<Vec<u32>>> {
  Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn tick_runs_callbacks_in_fifo_order() {
  let executor = Executor::new();
  let log = shared_log();
  for value in [1, 2, 3] {
    let sink = log.clone();
    executor.next_tick(move || sink.borrow_mut().push(value));
  }

  assert_eq!(executor.tick(), Ok(3));
  assert_eq!(*log.borrow(), vec![1, 2, 3]);
  assert_eq!(executor.tick_count(), 1);
}

#[test]
fn callbacks_enqueued_during_tick_wait_for_next_tick() {
  let executor = Executor::new();
  let log = shared_log();
  let inner = executor.clone();
  let outer_sink = log.clone();
  let inner_sink = log.clone();
  executor.next_tick(move || {
    outer_sink.borrow_mut().push(1);
    inner.next_tick(move || inner_sink.borrow_mut().push(2));
  });

  assert_eq!(executor.tick(), Ok(1));
  assert_eq!(*log.borrow(), vec![1]);
  assert_eq!(executor.pending(), 1);
  assert_eq!(executor.tick(), Ok(1));
  assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn empty_tick_is_not_counted() {
  let executor = Executor::new();
  assert_eq!(executor.tick(), Ok(0));
  assert_eq!(executor.tick_count(), 0);
}

#[test]
fn failed_callback_keeps_remaining_snapshot_ahead_of_newer_callbacks() {
  let executor = Executor::new();
  let log = shared_log();
  let first = log.clone();
  let spawner = executor.clone();
  let late = log.clone();
  executor.next_tick(move || {
    first.borrow_mut().push(1);
    spawner.next_tick(move || late.borrow_mut().push(9));
  });
  executor.try_next_tick(|| Err(TaskError::new("boom")));
  let third = log.clone();
  executor.next_tick(move || third.borrow_mut().push(3));

  assert_eq!(executor.tick(), Err(ExecutorError::TaskFailed(TaskError::new("boom"))));
  assert_eq!(executor.pending(), 2);
  assert_eq!(executor.tick(), Ok(2));
  assert_eq!(*log.borrow(), vec![1, 3, 9]);
}

#[test]
fn self_rescheduling_callback_terminates_after_k_plus_one_ticks() {
  fn reschedule(executor: Executor, remaining: Rc<Cell<u32>>) {
    if remaining.get() == 0 {
      return;
    }
    remaining.set(remaining.get() - 1);
    let next = executor.clone();
    executor.next_tick(move || reschedule(next, remaining));
  }

  let executor = Executor::new();
  let remaining = Rc::new(Cell::new(4));
  let start = executor.clone();
  let counter = remaining.clone();
  executor.next_tick(move || reschedule(start, counter));

  assert_eq!(executor.run(), Ok(()));
  assert_eq!(remaining.get(), 0);
  assert_eq!(executor.tick_count(), 5);
}

#[test]
fn run_continues_on_downstream_executor() {
  let upstream = Executor::new();
  let downstream = Executor::new();
  upstream.set_next(&downstream).expect("link");
  let log = shared_log();
  let down_sink = log.clone();
  let hop = downstream.clone();
  let up_sink = log.clone();
  upstream.next_tick(move || {
    up_sink.borrow_mut().push(1);
    hop.next_tick(move || down_sink.borrow_mut().push(2));
  });

  assert_eq!(upstream.run(), Ok(()));
  assert_eq!(*log.borrow(), vec![1, 2]);
  assert!(!downstream.has_pending());
}

#[test]
fn downstream_work_that_feeds_upstream_is_drained() {
  let upstream = Executor::new();
  let downstream = Executor::new();
  upstream.set_next(&downstream).expect("link");
  let log = shared_log();
  let back = upstream.clone();
  let back_sink = log.clone();
  downstream.next_tick(move || back.next_tick(move || back_sink.borrow_mut().push(7)));

  assert_eq!(upstream.run(), Ok(()));
  assert_eq!(*log.borrow(), vec![7]);
}

#[test]
fn set_next_rejects_self_and_cycles() {
  let a = Executor::new();
  let b = Executor::new();
  let c = Executor::new();

  assert_eq!(a.set_next(&a), Err(ExecutorError::CycleDetected));
  a.set_next(&b).expect("a -> b");
  b.set_next(&c).expect("b -> c");
  assert_eq!(c.set_next(&a), Err(ExecutorError::CycleDetected));
  assert!(c.next().is_none());
  assert!(a.next().is_some_and(|next| next.ptr_eq(&b)));
}

#[test]
fn clear_next_unlinks() {
  let a = Executor::new();
  let b = Executor::new();
  a.set_next(&b).expect("link");
  a.clear_next();
  assert!(a.next().is_none());
  b.set_next(&a).expect("reverse link is now acyclic");
}

#[test]
fn weak_handle_does_not_keep_executor_alive() {
  let executor = Executor::new();
  let weak = executor.downgrade();
  assert!(weak.upgrade().is_some());
  drop(executor);
  assert!(weak.upgrade().is_none());
}
