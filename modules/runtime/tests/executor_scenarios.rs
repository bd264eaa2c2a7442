use std::{
  cell::{Cell, RefCell},
  rc::Rc,
};

use cadence_runtime_rs::core::{
  dispatch::{Executor, ScheduledExecutor},
  error::ExecutorError,
};

#[test]
fn self_rescheduling_callback_runs_k_plus_one_ticks() {
  fn again(executor: Executor, left: Rc<Cell<u32>>) {
    if left.get() > 0 {
      left.set(left.get() - 1);
      let next = executor.clone();
      executor.next_tick(move || again(next, left));
    }
  }

  for k in [0_u32, 1, 7] {
    let executor = Executor::new();
    let left = Rc::new(Cell::new(k));
    let (start, counter) = (executor.clone(), left.clone());
    executor.next_tick(move || again(start, counter));

    executor.run().expect("run");
    assert_eq!(executor.tick_count(), u64::from(k) + 1);
  }
}

#[test]
fn linking_into_a_cycle_is_rejected() {
  let a = Executor::new();
  let b = Executor::new();
  a.set_next(&b).expect("a -> b");

  assert_eq!(b.set_next(&a), Err(ExecutorError::CycleDetected));
  assert!(b.next().is_none());
}

#[test]
fn timers_fire_in_expiry_order() {
  let scheduler = ScheduledExecutor::new();
  let fired = Rc::new(RefCell::new(Vec::new()));
  for delay in [10_u64, 5, 15] {
    let (sink, clock) = (fired.clone(), scheduler.clone());
    scheduler.schedule_delayed(move || sink.borrow_mut().push((delay, clock.current_time())), delay);
  }

  scheduler.run().expect("run");
  assert_eq!(*fired.borrow(), vec![(5, 5), (10, 10), (15, 15)]);
}

#[test]
fn cancelled_timer_is_skipped_among_co_expiring_timers() {
  let scheduler = ScheduledExecutor::new();
  let fired = Rc::new(RefCell::new(Vec::new()));
  let ids: Vec<_> = (0..3)
    .map(|label| {
      let sink = fired.clone();
      scheduler.schedule_delayed(move || sink.borrow_mut().push(label), 8)
    })
    .collect();

  assert!(scheduler.cancel_scheduled(ids[1]));
  scheduler.run().expect("run");
  assert_eq!(*fired.borrow(), vec![0, 2]);
}
