use super::{crate_version, prelude::*};

#[test]
fn version_matches_package_metadata() {
  assert_eq!(crate_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn prelude_drives_an_actor_from_a_timer() {
  struct Tick;

  let executor = ScheduledExecutor::new();
  let system = ActorSystem::new(&executor, ActorSystemConfig::default()).unwrap();
  let props = Props::from_fn(|| {
    BehaviorActor::new(
      0_u32,
      Behavior::new().on_message::<Tick, _>(|count, ctx, _| {
        *count += 1;
        if *count == 3 {
          ctx.stop_self();
        } else {
          ctx.schedule(5, ActorMessage::new(Tick));
        }
        Ok(())
      }),
    )
  });
  let actor = system.spawn(&props).unwrap();
  actor.tell(Tick);
  executor.run().unwrap();

  assert!(!actor.is_alive());
  assert_eq!(executor.current_time(), 10);
  assert_eq!(executor.clock_kind(), ClockKind::Logical);
}
