//! Addressable handle to an actor.

use core::{
  any::Any,
  fmt,
  hash::{Hash, Hasher},
};

use cadence_utils_rs::core::sync::WeakShared;

use super::Pid;
use crate::core::{
  messaging::ActorMessage,
  system::{ActorSystem, SystemState},
};

/// Handle used to send messages to an actor.
///
/// References do not keep the actor system alive. Sending to an actor that has stopped records a
/// dead letter instead of failing.
#[derive(Clone)]
pub struct ActorRef {
  pid:    Pid,
  system: WeakShared<SystemState>,
}

impl ActorRef {
  pub(crate) const fn new(pid: Pid, system: WeakShared<SystemState>) -> Self {
    Self { pid, system }
  }

  /// Returns the actor's pid.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Sends `message`. Delivery happens on a later executor tick.
  pub fn send(&self, message: ActorMessage) {
    if let Some(system) = self.system() {
      system.deliver(self, message);
    }
  }

  /// Sends `payload` without a sender.
  pub fn tell<T: Any>(&self, payload: T) {
    self.send(ActorMessage::new(payload));
  }

  /// Returns `true` while the actor is registered and not stopped.
  #[must_use]
  pub fn is_alive(&self) -> bool {
    self.system().is_some_and(|system| system.is_alive(self.pid))
  }

  fn system(&self) -> Option<ActorSystem> {
    self.system.upgrade().map(ActorSystem::from_state)
  }
}

impl PartialEq for ActorRef {
  fn eq(&self, other: &Self) -> bool {
    self.pid == other.pid
  }
}

impl Eq for ActorRef {}

impl Hash for ActorRef {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.pid.hash(state);
  }
}

impl fmt::Debug for ActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("ActorRef").field(&self.pid).finish()
  }
}

impl fmt::Display for ActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.pid)
  }
}
