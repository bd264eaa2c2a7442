use super::{Actor, ActorContext, ActorFailure, Behavior};
use crate::core::messaging::{ActorMessage, ActorSignal};

/// [`Actor`] made of a state value and a [`Behavior`] over it.
pub struct BehaviorActor<S> {
  state:    S,
  behavior: Behavior<S>,
}

impl<S: 'static> BehaviorActor<S> {
  /// Creates an actor from its initial state and behavior.
  #[must_use]
  pub const fn new(state: S, behavior: Behavior<S>) -> Self {
    Self { state, behavior }
  }

  /// Returns the current state.
  #[must_use]
  pub const fn state(&self) -> &S {
    &self.state
  }
}

impl<S: 'static> Actor for BehaviorActor<S> {
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: &ActorMessage) -> Result<bool, ActorFailure> {
    self.behavior.receive_message(&mut self.state, ctx, message)
  }

  fn signal(&mut self, ctx: &mut ActorContext<'_>, signal: &ActorSignal) -> Result<(), ActorFailure> {
    self.behavior.receive_signal(&mut self.state, ctx, signal).map(|_| ())
  }
}
