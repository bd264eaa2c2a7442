//! Actor registry, message routing and mailbox dispatch.

use alloc::{boxed::Box, format, vec::Vec};
use core::fmt;

use cadence_utils_rs::core::sync::RcShared;

use super::{DeadLetter, DeadLetterReason, DispatchPolicy, RoundRobinPolicy, SpawnError, SystemState};
use crate::core::{
  actor::{ActorRef, Pid},
  config::{ActorSystemConfig, ConfigError},
  dispatch::ScheduledExecutor,
  logging::LogLevel,
  mailbox::{ActorMailbox, MailboxState, MailboxTickReport},
  messaging::{ActorMessage, ActorSignal},
  props::Props,
};

const LOG_ORIGIN: &str = "actor-system";

/// Hosts actors on a [`ScheduledExecutor`].
///
/// Runnable mailboxes are ticked from executor callbacks: each dispatch pass ticks every mailbox
/// that was runnable when the pass started, in the order chosen by the [`DispatchPolicy`], and
/// schedules another pass if work remains. Driving the executor therefore drives the actors.
#[derive(Clone)]
pub struct ActorSystem {
  state: RcShared<SystemState>,
}

impl ActorSystem {
  /// Creates an actor system with round-robin dispatch.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError`] when `config` is invalid.
  pub fn new(executor: &ScheduledExecutor, config: ActorSystemConfig) -> Result<Self, ConfigError> {
    Self::with_policy(executor, config, RoundRobinPolicy::new())
  }

  /// Creates an actor system with a custom dispatch policy.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError`] when `config` is invalid.
  pub fn with_policy<P: DispatchPolicy + 'static>(
    executor: &ScheduledExecutor,
    config: ActorSystemConfig,
    policy: P,
  ) -> Result<Self, ConfigError> {
    config.validate()?;
    let system = Self::from_state(RcShared::new(SystemState::new(executor, config, Box::new(policy))));
    system.log(LogLevel::Info, format_args!("actor system '{}' created", system.name()));
    Ok(system)
  }

  pub(crate) const fn from_state(state: RcShared<SystemState>) -> Self {
    Self { state }
  }

  /// Returns the configuration.
  #[must_use]
  pub fn config(&self) -> &ActorSystemConfig {
    &self.state.config
  }

  /// Returns the system name.
  #[must_use]
  pub fn name(&self) -> &str {
    self.state.config.system_name()
  }

  /// Returns the executor driving the system.
  #[must_use]
  pub fn executor(&self) -> &ScheduledExecutor {
    &self.state.executor
  }

  /// Spawns a top-level actor.
  ///
  /// The actor receives `Started` on a later executor tick.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError`] when the alias in `props` is empty or already taken.
  pub fn spawn(&self, props: &Props) -> Result<ActorRef, SpawnError> {
    self.spawn_with_parent(props, None)
  }

  pub(crate) fn spawn_child(&self, props: &Props, parent: ActorRef) -> Result<ActorRef, SpawnError> {
    self.spawn_with_parent(props, Some(parent))
  }

  fn spawn_with_parent(&self, props: &Props, parent: Option<ActorRef>) -> Result<ActorRef, SpawnError> {
    let pid = Pid::new(self.state.next_pid.get());
    if let Some(alias) = props.alias() {
      self.state.names.borrow_mut().register(alias, pid)?;
    }
    self.state.next_pid.set(pid.value() + 1);

    let actor = ActorRef::new(pid, self.state.downgrade());
    let top_level = parent.is_none();
    let mailbox = RcShared::new(ActorMailbox::new(actor.clone(), parent, props.clone(), self.state.config.throughput()));
    self.state.mailboxes.borrow_mut().insert(pid, mailbox.clone());
    if top_level {
      self.state.top_level.borrow_mut().push(actor.clone());
    }
    self.log_for(pid, LogLevel::Debug, format_args!("spawned with {props:?}"));
    self.mark_runnable(&mailbox);
    Ok(actor)
  }

  /// Resolves an alias to the live actor holding it.
  #[must_use]
  pub fn lookup(&self, alias: &str) -> Option<ActorRef> {
    let pid = self.state.names.borrow().resolve(alias)?;
    Some(ActorRef::new(pid, self.state.downgrade()))
  }

  /// Returns the mailbox of a registered actor.
  #[must_use]
  pub fn mailbox(&self, actor: &ActorRef) -> Option<RcShared<ActorMailbox>> {
    self.find_mailbox(actor.pid())
  }

  /// Returns the lifecycle state of a registered actor.
  #[must_use]
  pub fn mailbox_state(&self, actor: &ActorRef) -> Option<MailboxState> {
    self.find_mailbox(actor.pid()).map(|mailbox| mailbox.state())
  }

  /// Returns `true` when `pid` is registered and not stopped.
  #[must_use]
  pub fn is_alive(&self, pid: Pid) -> bool {
    self.find_mailbox(pid).is_some_and(|mailbox| !mailbox.state().is_stopped())
  }

  /// Returns the number of registered actors.
  #[must_use]
  pub fn actor_count(&self) -> usize {
    self.state.mailboxes.borrow().len()
  }

  /// Asks `actor` to stop.
  pub fn stop(&self, actor: &ActorRef) {
    self.notify(actor, ActorSignal::Stopping);
  }

  /// Asks `actor` to restart.
  pub fn restart(&self, actor: &ActorRef) {
    self.notify(actor, ActorSignal::Restarting);
  }

  /// Asks every top-level actor to stop. Children stop before their parents.
  pub fn shutdown(&self) {
    self.log(LogLevel::Info, format_args!("actor system '{}' shutting down", self.name()));
    let top_level = self.state.top_level.borrow().clone();
    for actor in &top_level {
      self.stop(actor);
    }
  }

  /// Returns the retained dead letters, oldest first.
  #[must_use]
  pub fn dead_letters(&self) -> Vec<DeadLetter> {
    self.state.dead_letters.borrow().iter().cloned().collect()
  }

  pub(crate) fn deliver(&self, target: &ActorRef, message: ActorMessage) {
    match self.find_mailbox(target.pid()) {
      | Some(mailbox) if !mailbox.state().is_stopped() => match mailbox.enqueue_message(message.clone()) {
        | Ok(()) => self.mark_runnable(&mailbox),
        | Err(error) => {
          self.log(LogLevel::Warn, format_args!("{error}"));
          self.record_dead_letter(target.pid(), message, DeadLetterReason::RecipientStopped);
        },
      },
      | _ => {
        self.log(LogLevel::Warn, format_args!("{} sent to stopped actor {target}", message.type_name()));
        self.record_dead_letter(target.pid(), message, DeadLetterReason::RecipientStopped);
      },
    }
  }

  pub(crate) fn notify(&self, target: &ActorRef, signal: ActorSignal) {
    let Some(mailbox) = self.find_mailbox(target.pid()) else {
      self.log(LogLevel::Debug, format_args!("dropped {:?} for unknown actor {target}", signal.kind()));
      return;
    };
    match mailbox.enqueue_signal(signal) {
      | Ok(()) => self.mark_runnable(&mailbox),
      | Err(error) => self.log(LogLevel::Debug, format_args!("dropped signal: {error}")),
    }
  }

  pub(crate) fn watch(&self, target: &ActorRef, watcher: &ActorRef) {
    match self.find_mailbox(target.pid()) {
      | Some(mailbox) if !mailbox.state().is_stopped() => mailbox.add_watcher(watcher),
      | _ => self.notify(watcher, ActorSignal::Terminated(target.clone())),
    }
  }

  pub(crate) fn unwatch(&self, target: &ActorRef, watcher: &ActorRef) {
    if let Some(mailbox) = self.find_mailbox(target.pid()) {
      mailbox.remove_watcher(watcher);
    }
  }

  pub(crate) fn log_for(&self, pid: Pid, level: LogLevel, message: fmt::Arguments<'_>) {
    let logger = &self.state.logger;
    if logger.is_enabled(level) {
      logger.log(level, format!("actor:{pid}"), self.state.executor.tick_count(), message);
    }
  }

  fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) {
    self.state.logger.log(level, LOG_ORIGIN, self.state.executor.tick_count(), message);
  }

  fn find_mailbox(&self, pid: Pid) -> Option<RcShared<ActorMailbox>> {
    self.state.mailboxes.borrow().get(&pid).cloned()
  }

  fn mark_runnable(&self, mailbox: &ActorMailbox) {
    if mailbox.mark_scheduled() {
      self.state.policy.borrow_mut().enqueue(mailbox.pid());
      self.schedule_dispatch();
    }
  }

  fn schedule_dispatch(&self) {
    if self.state.dispatch_pending.replace(true) {
      return;
    }
    let system = self.state.downgrade();
    self.state.executor.next_tick(move || {
      if let Some(state) = system.upgrade() {
        Self::from_state(state).dispatch_pass();
      }
    });
  }

  fn dispatch_pass(&self) {
    self.state.dispatch_pending.set(false);
    let batch = self.state.policy.borrow().len();
    for _ in 0..batch {
      let next = self.state.policy.borrow_mut().next();
      let Some(pid) = next else {
        break;
      };
      let Some(mailbox) = self.find_mailbox(pid) else {
        continue;
      };
      mailbox.clear_scheduled();
      let report = mailbox.tick(self);
      self.absorb(&mailbox, report);
    }
  }

  fn absorb(&self, mailbox: &ActorMailbox, report: MailboxTickReport) {
    let pid = mailbox.pid();
    for message in report.unhandled {
      self.log_for(pid, LogLevel::Debug, format_args!("unhandled {}", message.type_name()));
      self.record_dead_letter(pid, message, DeadLetterReason::Unhandled);
    }
    for message in report.dropped {
      self.record_dead_letter(pid, message, DeadLetterReason::MailboxStopped);
    }
    if report.busy {
      // The outer tick re-examines this mailbox once it returns.
      return;
    }
    if report.stopped {
      self.despawn(mailbox);
    } else if mailbox.has_runnable_work() {
      self.mark_runnable(mailbox);
    }
  }

  fn despawn(&self, mailbox: &ActorMailbox) {
    let pid = mailbox.pid();
    self.state.mailboxes.borrow_mut().remove(&pid);
    if let Some(alias) = mailbox.alias() {
      self.state.names.borrow_mut().remove(alias, pid);
    }
    self.state.top_level.borrow_mut().retain(|actor| actor.pid() != pid);
  }

  fn record_dead_letter(&self, recipient: Pid, message: ActorMessage, reason: DeadLetterReason) {
    let mut letters = self.state.dead_letters.borrow_mut();
    if letters.len() == self.state.config.dead_letter_capacity() {
      letters.pop_front();
    }
    letters.push_back(DeadLetter::new(recipient, message, reason));
  }
}

impl fmt::Debug for ActorSystem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorSystem").field("name", &self.name()).field("actors", &self.actor_count()).finish()
  }
}
