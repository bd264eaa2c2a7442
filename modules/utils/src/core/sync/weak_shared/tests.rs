use super::*;

#[test]
fn empty_weak_never_upgrades() {
  let weak: WeakShared<u8> = WeakShared::new();
  assert!(weak.upgrade().is_none());
  assert_eq!(weak.strong_count(), 0);
}

#[test]
fn weak_tracks_strong_count() {
  let shared = RcShared::new("value");
  let weak = shared.downgrade();
  let second = shared.clone();
  assert_eq!(weak.strong_count(), 2);
  drop(second);
  assert_eq!(weak.strong_count(), 1);
}

#[test]
fn weak_ptr_eq_follows_allocation() {
  let shared = RcShared::new(1);
  let other = RcShared::new(1);
  assert!(shared.downgrade().ptr_eq(&shared.clone().downgrade()));
  assert!(!shared.downgrade().ptr_eq(&other.downgrade()));
}
