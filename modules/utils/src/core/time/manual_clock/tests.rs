use super::*;

#[test]
fn wait_until_jumps_to_deadline() {
  let mut clock = ManualClock::new();
  clock.wait_until(30);
  assert_eq!(clock.now(), 30);
}

#[test]
fn wait_until_never_moves_backwards() {
  let mut clock = ManualClock::starting_at(50);
  clock.wait_until(10);
  assert_eq!(clock.now(), 50);
}

#[test]
fn advance_saturates() {
  let mut clock = ManualClock::starting_at(u64::MAX - 1);
  clock.advance(10);
  assert_eq!(clock.now(), u64::MAX);
  assert_eq!(clock.kind(), ClockKind::Logical);
}
