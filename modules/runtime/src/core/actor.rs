mod actor_context;
mod actor_failure;
mod actor_ref;
mod actor_trait;
mod behavior;
mod behavior_actor;
mod pid;

pub use actor_context::ActorContext;
pub use actor_failure::ActorFailure;
pub use actor_ref::ActorRef;
pub use actor_trait::Actor;
pub use behavior::Behavior;
pub use behavior_actor::BehaviorActor;
pub use pid::Pid;
