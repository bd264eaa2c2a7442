//! Type-erased user message.


use alloc::rc::Rc;
use core::{
  any::{Any, TypeId, type_name},
  fmt,
};

use cadence_utils_rs::core::sync::RcShared;

use crate::core::actor::ActorRef;

/// Message delivered to an actor's message queue.
///
/// The payload is shared, so cloning a message (for redelivery or dead-letter recording) does not
/// clone the payload.
#[derive(Clone)]
pub struct ActorMessage {
  payload:   RcShared<dyn Any>,
  tag:       TypeId,
  type_name: &'static str,
  sender:    Option<ActorRef>,
  reply_to:  Option<ActorRef>,
}

impl ActorMessage {
  /// Wraps `payload` into a message without sender.
  #[must_use]
  pub fn new<T: Any>(payload: T) -> Self {
    let payload: Rc<dyn Any> = Rc::new(payload);
    Self {
      payload: RcShared::from_rc(payload),
      tag: TypeId::of::<T>(),
      type_name: type_name::<T>(),
      sender: None,
      reply_to: None,
    }
  }

  /// Returns the message with `sender` attached.
  #[must_use]
  pub fn with_sender(mut self, sender: ActorRef) -> Self {
    self.sender = Some(sender);
    self
  }

  /// Returns the message with an explicit reply target attached.
  #[must_use]
  pub fn with_reply_to(mut self, reply_to: ActorRef) -> Self {
    self.reply_to = Some(reply_to);
    self
  }

  /// Returns the discriminant used to route the message to a handler.
  #[must_use]
  pub const fn tag(&self) -> TypeId {
    self.tag
  }

  /// Returns the payload's type name.
  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    self.type_name
  }

  /// Returns `true` when the payload is a `T`.
  #[must_use]
  pub fn is<T: Any>(&self) -> bool {
    self.tag == TypeId::of::<T>()
  }

  /// Borrows the payload as `T`.
  #[must_use]
  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    (*self.payload).downcast_ref::<T>()
  }

  /// Returns the sending actor, if any.
  #[must_use]
  pub const fn sender(&self) -> Option<&ActorRef> {
    self.sender.as_ref()
  }

  /// Returns the reply target, if any.
  #[must_use]
  pub const fn reply_to(&self) -> Option<&ActorRef> {
    self.reply_to.as_ref()
  }
}

impl fmt::Debug for ActorMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorMessage")
      .field("type", &self.type_name)
      .field("sender", &self.sender)
      .field("reply_to", &self.reply_to)
      .finish()
  }
}
