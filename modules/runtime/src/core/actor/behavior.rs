//! Handler table keyed by message type and signal kind.

#[cfg(test)]
mod tests;

use alloc::boxed::Box;
use core::any::{Any, TypeId};

use ahash::RandomState;
use hashbrown::HashMap;

use super::{ActorContext, ActorFailure};
use crate::core::messaging::{ActorMessage, ActorSignal, SignalKind};

type MessageHandler<S> = Box<dyn FnMut(&mut S, &mut ActorContext<'_>, &ActorMessage) -> Result<(), ActorFailure>>;
type SignalHandler<S> = Box<dyn FnMut(&mut S, &mut ActorContext<'_>, &ActorSignal) -> Result<(), ActorFailure>>;

/// Routing table from message payload types and signal kinds to handlers over a state `S`.
///
/// Registering a second handler for the same key replaces the first.
pub struct Behavior<S> {
  messages: HashMap<TypeId, MessageHandler<S>, RandomState>,
  signals:  [Option<SignalHandler<S>>; SignalKind::COUNT],
}

impl<S: 'static> Behavior<S> {
  /// Creates an empty behavior.
  #[must_use]
  pub fn new() -> Self {
    Self { messages: HashMap::with_hasher(RandomState::new()), signals: core::array::from_fn(|_| None) }
  }

  /// Handles messages whose payload is an `M`.
  #[must_use]
  pub fn on_message<M, F>(mut self, mut handler: F) -> Self
  where
    M: Any,
    F: FnMut(&mut S, &mut ActorContext<'_>, &M) -> Result<(), ActorFailure> + 'static, {
    let erased = message_handler::<S, _>(move |state, ctx, message| {
      match message.downcast_ref::<M>() {
        | Some(payload) => handler(state, ctx, payload),
        | None => Ok(()),
      }
    });
    self.messages.insert(TypeId::of::<M>(), erased);
    self
  }

  /// Handles signals of the given kind.
  #[must_use]
  pub fn on_signal<F>(mut self, kind: SignalKind, handler: F) -> Self
  where
    F: FnMut(&mut S, &mut ActorContext<'_>, &ActorSignal) -> Result<(), ActorFailure> + 'static, {
    self.signals[kind.index()] = Some(Box::new(handler));
    self
  }

  /// Returns `true` when a handler is registered for payloads of type `tag`.
  #[must_use]
  pub fn handles_message(&self, tag: TypeId) -> bool {
    self.messages.contains_key(&tag)
  }

  /// Returns `true` when a handler is registered for `kind`.
  #[must_use]
  pub fn handles_signal(&self, kind: SignalKind) -> bool {
    self.signals[kind.index()].is_some()
  }

  /// Routes `message` to its handler. Returns `Ok(false)` when none matches.
  ///
  /// # Errors
  ///
  /// Propagates the handler's failure.
  pub fn receive_message(
    &mut self,
    state: &mut S,
    ctx: &mut ActorContext<'_>,
    message: &ActorMessage,
  ) -> Result<bool, ActorFailure> {
    match self.messages.get_mut(&message.tag()) {
      | Some(handler) => handler(state, ctx, message).map(|()| true),
      | None => Ok(false),
    }
  }

  /// Routes `signal` to its handler. Returns `Ok(false)` when none matches.
  ///
  /// # Errors
  ///
  /// Propagates the handler's failure.
  pub fn receive_signal(
    &mut self,
    state: &mut S,
    ctx: &mut ActorContext<'_>,
    signal: &ActorSignal,
  ) -> Result<bool, ActorFailure> {
    match &mut self.signals[signal.kind().index()] {
      | Some(handler) => handler(state, ctx, signal).map(|()| true),
      | None => Ok(false),
    }
  }
}

impl<S: 'static> Default for Behavior<S> {
  fn default() -> Self {
    Self::new()
  }
}

fn message_handler<S, F>(handler: F) -> MessageHandler<S>
where
  F: FnMut(&mut S, &mut ActorContext<'_>, &ActorMessage) -> Result<(), ActorFailure> + 'static, {
  Box::new(handler)
}
