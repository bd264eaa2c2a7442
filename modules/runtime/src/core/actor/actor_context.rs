//! Per-invocation view handed to actor handlers.

use core::{any::Any, fmt};

use cadence_utils_rs::core::time::TimerId;

use super::ActorRef;
use crate::core::{
  dispatch::ScheduledExecutor,
  logging::LogLevel,
  mailbox::{ActorMailbox, MailboxCore},
  messaging::{ActorMessage, ActorSignal},
  props::Props,
  system::{ActorSystem, SpawnError},
};

/// Context available while an actor handles a message or a signal.
pub struct ActorContext<'a> {
  system:   &'a ActorSystem,
  mailbox:  &'a ActorMailbox,
  core:     &'a mut MailboxCore,
  sender:   Option<ActorRef>,
  reply_to: Option<ActorRef>,
}

impl<'a> ActorContext<'a> {
  pub(crate) const fn new(
    system: &'a ActorSystem,
    mailbox: &'a ActorMailbox,
    core: &'a mut MailboxCore,
    sender: Option<ActorRef>,
    reply_to: Option<ActorRef>,
  ) -> Self {
    Self { system, mailbox, core, sender, reply_to }
  }

  /// Returns a reference to the running actor.
  #[must_use]
  pub const fn self_ref(&self) -> &ActorRef {
    &self.core.self_ref
  }

  /// Returns the parent, or `None` for a top-level actor.
  #[must_use]
  pub const fn parent(&self) -> Option<&ActorRef> {
    self.core.parent.as_ref()
  }

  /// Returns the live children in spawn order.
  #[must_use]
  pub fn children(&self) -> &[ActorRef] {
    &self.core.children
  }

  /// Returns the sender of the message being handled.
  #[must_use]
  pub const fn sender(&self) -> Option<&ActorRef> {
    self.sender.as_ref()
  }

  /// Returns the reply target of the message being handled.
  #[must_use]
  pub const fn reply_to(&self) -> Option<&ActorRef> {
    self.reply_to.as_ref()
  }

  /// Returns the owning actor system.
  #[must_use]
  pub const fn system(&self) -> &ActorSystem {
    self.system
  }

  /// Returns the executor driving the actor system.
  #[must_use]
  pub fn executor(&self) -> &ScheduledExecutor {
    self.system.executor()
  }

  /// Spawns a child actor.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError`] when the requested alias is invalid or taken.
  pub fn spawn(&mut self, props: &Props) -> Result<ActorRef, SpawnError> {
    let child = self.system.spawn_child(props, self.core.self_ref.clone())?;
    self.core.children.push(child.clone());
    Ok(child)
  }

  /// Asks `target` to stop. Stopping this actor queues the signal on its own mailbox.
  pub fn stop(&mut self, target: &ActorRef) {
    if *target == self.core.self_ref {
      self.signal_self(ActorSignal::Stopping);
    } else {
      self.system.notify(target, ActorSignal::Stopping);
    }
  }

  /// Asks this actor to stop.
  pub fn stop_self(&mut self) {
    self.signal_self(ActorSignal::Stopping);
  }

  /// Asks this actor to restart with a fresh instance.
  pub fn restart(&mut self) {
    self.signal_self(ActorSignal::Restarting);
  }

  /// Delivers `Terminated(target)` to this actor once `target` stops.
  ///
  /// Watching an actor that already stopped delivers the notification right away.
  pub fn watch(&mut self, target: &ActorRef) {
    if *target != self.core.self_ref {
      self.system.watch(target, &self.core.self_ref);
    }
  }

  /// Cancels a previous [`ActorContext::watch`].
  pub fn unwatch(&mut self, target: &ActorRef) {
    self.system.unwatch(target, &self.core.self_ref);
  }

  /// Sends `message` to this actor after `delay`.
  pub fn schedule(&mut self, delay: u64, message: ActorMessage) -> TimerId {
    let target = self.core.self_ref.clone();
    self.schedule_to(delay, &target, message)
  }

  /// Sends `message` to `target` after `delay`.
  pub fn schedule_to(&self, delay: u64, target: &ActorRef, message: ActorMessage) -> TimerId {
    let target = target.clone();
    self.system.executor().schedule_delayed(move || target.send(message), delay)
  }

  /// Cancels a delivery scheduled with [`ActorContext::schedule`].
  pub fn cancel_schedule(&self, id: TimerId) -> bool {
    self.system.executor().cancel_scheduled(id)
  }

  /// Queues `signal` on `target`'s signal queue.
  pub fn notify(&mut self, target: &ActorRef, signal: ActorSignal) {
    if *target == self.core.self_ref {
      self.signal_self(signal);
    } else {
      self.system.notify(target, signal);
    }
  }

  /// Sends `payload` to `target` with this actor as sender.
  pub fn send<T: Any>(&self, target: &ActorRef, payload: T) {
    target.send(ActorMessage::new(payload).with_sender(self.core.self_ref.clone()));
  }

  /// Answers the message being handled: to its reply target, or else to its sender.
  ///
  /// Returns `false` when the message carries neither.
  pub fn reply<T: Any>(&self, payload: T) -> bool {
    match self.reply_to.as_ref().or(self.sender.as_ref()) {
      | Some(target) => {
        self.send(target, payload);
        true
      },
      | None => false,
    }
  }

  /// Emits a log event attributed to this actor.
  pub fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) {
    self.system.log_for(self.core.self_ref.pid(), level, message);
  }

  fn signal_self(&self, signal: ActorSignal) {
    if let Err(error) = self.mailbox.enqueue_signal(signal) {
      self.log(LogLevel::Warn, format_args!("{error}"));
    }
  }
}
