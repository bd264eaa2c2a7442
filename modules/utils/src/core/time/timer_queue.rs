//! Expiry-ordered timer storage with lazy cancellation.

use alloc::collections::{BTreeSet, BinaryHeap};
use core::cmp::{Ordering, Reverse};

use super::TimerId;


/// Min-heap of timers ordered by expiry, ties broken by scheduling order.
///
/// Cancellation is lazy: a cancelled entry stays in the heap, inert, until it reaches the head
/// and is discarded without being returned, or until no live timer remains, at which point every
/// cancelled entry is dropped at once. Only live entries count towards [`len`](Self::len).
pub struct TimerQueue<P> {
  heap:      BinaryHeap<Reverse<QueuedTimer<P>>>,
  live:      BTreeSet<TimerId>,
  cancelled: BTreeSet<TimerId>,
  next_id:   u64,
}

impl<P> TimerQueue<P> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { heap: BinaryHeap::new(), live: BTreeSet::new(), cancelled: BTreeSet::new(), next_id: 1 }
  }

  /// Returns the number of live (scheduled, not cancelled, not fired) timers.
  #[must_use]
  pub fn len(&self) -> usize {
    self.live.len()
  }

  /// Returns `true` when no live timer remains.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.live.is_empty()
  }

  /// Returns `true` when `id` refers to a live timer.
  #[must_use]
  pub fn contains(&self, id: TimerId) -> bool {
    self.live.contains(&id)
  }

  /// Schedules `payload` to expire at `expiry`.
  pub fn schedule(&mut self, expiry: u64, payload: P) -> TimerId {
    let id = TimerId::new(self.next_id);
    self.next_id = self.next_id.wrapping_add(1);
    self.heap.push(Reverse(QueuedTimer { expiry, id, payload }));
    self.live.insert(id);
    id
  }

  /// Flags the timer as cancelled.
  ///
  /// Returns `false` when the timer already fired, was already cancelled or never existed.
  pub fn cancel(&mut self, id: TimerId) -> bool {
    if !self.live.remove(&id) {
      return false;
    }
    self.cancelled.insert(id);
    self.reclaim_when_idle();
    true
  }

  /// Returns the expiry of the earliest live timer.
  ///
  /// Cancelled entries found at the head are reclaimed on the way.
  pub fn next_expiry(&mut self) -> Option<u64> {
    self.discard_cancelled_head();
    self.heap.peek().map(|Reverse(timer)| timer.expiry)
  }

  /// Pops the earliest live timer whose expiry is at or before `now`.
  pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, P)> {
    self.discard_cancelled_head();
    match self.heap.peek() {
      | Some(Reverse(timer)) if timer.expiry <= now => {},
      | _ => return None,
    }
    let Reverse(timer) = self.heap.pop()?;
    self.live.remove(&timer.id);
    self.reclaim_when_idle();
    Some((timer.id, timer.payload))
  }

  /// Drops every entry, live or cancelled.
  pub fn clear(&mut self) {
    self.heap.clear();
    self.live.clear();
    self.cancelled.clear();
  }

  fn reclaim_when_idle(&mut self) {
    if self.live.is_empty() {
      self.heap.clear();
      self.cancelled.clear();
    }
  }

  fn discard_cancelled_head(&mut self) {
    while let Some(Reverse(timer)) = self.heap.peek() {
      if !self.cancelled.contains(&timer.id) {
        break;
      }
      let id = timer.id;
      self.heap.pop();
      self.cancelled.remove(&id);
    }
  }
}

impl<P> Default for TimerQueue<P> {
  fn default() -> Self {
    Self::new()
  }
}

struct QueuedTimer<P> {
  expiry:  u64,
  id:      TimerId,
  payload: P,
}

impl<P> PartialEq for QueuedTimer<P> {
  fn eq(&self, other: &Self) -> bool {
    self.expiry == other.expiry && self.id == other.id
  }
}

impl<P> Eq for QueuedTimer<P> {}

impl<P> PartialOrd for QueuedTimer<P> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<P> Ord for QueuedTimer<P> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.expiry.cmp(&other.expiry).then_with(|| self.id.cmp(&other.id))
  }
}
