use crate::core::{
  actor::{ActorContext, ActorFailure},
  supervision::SupervisorDirective,
};

/// Decides what happens after an actor failed to handle a message.
///
/// The context belongs to the failed actor, so a supervisor can stop or restart it.
pub trait Supervisor {
  /// Returns the directive for `failure`.
  fn supervise(&self, ctx: &mut ActorContext<'_>, failure: &ActorFailure) -> SupervisorDirective;
}

impl<F> Supervisor for F
where
  F: Fn(&mut ActorContext<'_>, &ActorFailure) -> SupervisorDirective,
{
  fn supervise(&self, ctx: &mut ActorContext<'_>, failure: &ActorFailure) -> SupervisorDirective {
    self(ctx, failure)
  }
}
