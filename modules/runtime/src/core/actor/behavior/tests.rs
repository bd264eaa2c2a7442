use alloc::{rc::Rc, string::String, vec, vec::Vec};
use core::{any::TypeId, cell::RefCell};

use super::Behavior;
use crate::core::{
  actor::BehaviorActor,
  config::ActorSystemConfig,
  dispatch::ScheduledExecutor,
  messaging::SignalKind,
  props::Props,
  system::{ActorSystem, DeadLetterReason},
};

struct Add(i64);
struct Report;

#[test]
fn registration_is_visible_through_queries() {
  let behavior: Behavior<i64> = Behavior::new()
    .on_message::<Add, _>(|total, _, add| {
      *total += add.0;
      Ok(())
    })
    .on_signal(SignalKind::Stopped, |_, _, _| Ok(()));

  assert!(behavior.handles_message(TypeId::of::<Add>()));
  assert!(!behavior.handles_message(TypeId::of::<Report>()));
  assert!(behavior.handles_signal(SignalKind::Stopped));
  assert!(!behavior.handles_signal(SignalKind::Started));
}

#[test]
fn routes_messages_by_payload_type_and_keeps_state() {
  let executor = ScheduledExecutor::new();
  let system = ActorSystem::new(&executor, ActorSystemConfig::default()).expect("system");
  let reports: Rc<RefCell<Vec<i64>>> = Rc::new(RefCell::new(Vec::new()));
  let sink = reports.clone();
  let props = Props::from_fn(move || {
    let sink = sink.clone();
    BehaviorActor::new(
      0_i64,
      Behavior::new()
        .on_message::<Add, _>(|total, _, add| {
          *total += add.0;
          Ok(())
        })
        .on_message::<Report, _>(move |total, _, _| {
          sink.borrow_mut().push(*total);
          Ok(())
        }),
    )
  });

  let actor = system.spawn(&props).expect("spawn");
  actor.tell(Add(2));
  actor.tell(Add(40));
  actor.tell(Report);
  actor.tell(String::from("unknown"));
  executor.run().expect("run");

  assert_eq!(*reports.borrow(), vec![42]);
  let letters = system.dead_letters();
  assert_eq!(letters.len(), 1);
  assert_eq!(letters[0].reason(), DeadLetterReason::Unhandled);
}

#[test]
fn later_registration_replaces_earlier_one() {
  let executor = ScheduledExecutor::new();
  let system = ActorSystem::new(&executor, ActorSystemConfig::default()).expect("system");
  let seen: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
  let sink = seen.clone();
  let props = Props::from_fn(move || {
    let (first, second) = (sink.clone(), sink.clone());
    BehaviorActor::new(
      (),
      Behavior::new()
        .on_message::<Report, _>(move |_, _, _| {
          first.borrow_mut().push("first");
          Ok(())
        })
        .on_message::<Report, _>(move |_, _, _| {
          second.borrow_mut().push("second");
          Ok(())
        }),
    )
  });

  system.spawn(&props).expect("spawn").tell(Report);
  executor.run().expect("run");
  assert_eq!(*seen.borrow(), vec!["second"]);
}
