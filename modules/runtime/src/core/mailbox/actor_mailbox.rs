//! Per-actor mailbox: signal and message queues plus the lifecycle state machine.

use alloc::{boxed::Box, collections::VecDeque, string::String, vec::Vec};
use core::{
  cell::{Cell, RefCell},
  mem,
};

use super::{MailboxCore, MailboxError, MailboxState, MailboxTickReport};
use crate::core::{
  actor::{Actor, ActorContext, ActorFailure, ActorRef, Pid},
  logging::LogLevel,
  messaging::{ActorMessage, ActorSignal},
  props::Props,
  supervision::{Supervisor, SupervisorDirective},
  system::ActorSystem,
};

/// Queues and lifecycle of one actor.
///
/// A tick first drains every queued signal, then, if the actor is alive, dispatches up to
/// `throughput` messages. Message dispatch stops early as soon as a signal arrives, so signals
/// always overtake messages.
pub struct ActorMailbox {
  pid:        Pid,
  alias:      Option<String>,
  throughput: usize,
  state:      Cell<MailboxState>,
  scheduled:  Cell<bool>,
  messages:   RefCell<VecDeque<ActorMessage>>,
  signals:    RefCell<VecDeque<ActorSignal>>,
  watchers:   RefCell<Vec<ActorRef>>,
  core:       RefCell<MailboxCore>,
  actor:      RefCell<Option<Box<dyn Actor>>>,
}

impl ActorMailbox {
  pub(crate) fn new(self_ref: ActorRef, parent: Option<ActorRef>, props: Props, throughput: usize) -> Self {
    let mut signals = VecDeque::new();
    signals.push_back(ActorSignal::Started);
    Self {
      pid: self_ref.pid(),
      alias: props.alias().map(String::from),
      throughput,
      state: Cell::new(MailboxState::Starting),
      scheduled: Cell::new(false),
      messages: RefCell::new(VecDeque::new()),
      signals: RefCell::new(signals),
      watchers: RefCell::new(Vec::new()),
      core: RefCell::new(MailboxCore::new(self_ref, parent, props)),
      actor: RefCell::new(None),
    }
  }

  /// Returns the owning actor's pid.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Returns the alias the actor was spawned with.
  #[must_use]
  pub fn alias(&self) -> Option<&str> {
    self.alias.as_deref()
  }

  /// Returns the current lifecycle state.
  #[must_use]
  pub fn state(&self) -> MailboxState {
    self.state.get()
  }

  /// Returns the number of queued messages.
  #[must_use]
  pub fn pending_messages(&self) -> usize {
    self.messages.borrow().len()
  }

  /// Returns the number of queued signals.
  #[must_use]
  pub fn pending_signals(&self) -> usize {
    self.signals.borrow().len()
  }

  /// Returns `true` when anything is queued.
  #[must_use]
  pub fn has_pending(&self) -> bool {
    self.pending_signals() > 0 || self.pending_messages() > 0
  }

  /// Appends a user message.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Stopped`] once the mailbox is stopped.
  pub fn enqueue_message(&self, message: ActorMessage) -> Result<(), MailboxError> {
    if self.state().is_stopped() {
      return Err(MailboxError::Stopped(self.pid));
    }
    self.messages.borrow_mut().push_back(message);
    Ok(())
  }

  /// Appends a lifecycle signal.
  ///
  /// # Errors
  ///
  /// Returns [`MailboxError::Stopped`] once the mailbox is stopped.
  pub fn enqueue_signal(&self, signal: ActorSignal) -> Result<(), MailboxError> {
    if self.state().is_stopped() {
      return Err(MailboxError::Stopped(self.pid));
    }
    self.signals.borrow_mut().push_back(signal);
    Ok(())
  }

  /// Returns the actors watching this one.
  #[must_use]
  pub fn watchers(&self) -> Vec<ActorRef> {
    self.watchers.borrow().clone()
  }

  /// Returns `true` when the next tick would do something.
  pub(crate) fn has_runnable_work(&self) -> bool {
    self.pending_signals() > 0 || (self.state() == MailboxState::Alive && self.pending_messages() > 0)
  }

  pub(crate) fn mark_scheduled(&self) -> bool {
    !self.scheduled.replace(true)
  }

  pub(crate) fn clear_scheduled(&self) {
    self.scheduled.set(false);
  }

  pub(crate) fn add_watcher(&self, watcher: &ActorRef) {
    let mut watchers = self.watchers.borrow_mut();
    if !watchers.contains(watcher) {
      watchers.push(watcher.clone());
    }
  }

  pub(crate) fn remove_watcher(&self, watcher: &ActorRef) {
    self.watchers.borrow_mut().retain(|candidate| candidate != watcher);
  }

  /// Runs one scheduling quantum.
  pub(crate) fn tick(&self, system: &ActorSystem) -> MailboxTickReport {
    let mut report = MailboxTickReport::default();
    let Ok(mut core) = self.core.try_borrow_mut() else {
      report.busy = true;
      return report;
    };
    let Ok(mut slot) = self.actor.try_borrow_mut() else {
      report.busy = true;
      return report;
    };
    if self.state().is_stopped() {
      report.stopped = true;
      return report;
    }

    while let Some(signal) = self.pop_signal() {
      report.signals += 1;
      self.handle_signal(system, &mut core, &mut slot, signal, &mut report);
      if self.state().is_stopped() {
        report.stopped = true;
        return report;
      }
    }

    if self.state() == MailboxState::Alive {
      self.dispatch_messages(system, &mut core, &mut slot, &mut report);
    }
    report
  }

  fn pop_signal(&self) -> Option<ActorSignal> {
    self.signals.borrow_mut().pop_front()
  }

  fn has_lifecycle_signal(&self) -> bool {
    self.signals.borrow().iter().any(|signal| matches!(signal, ActorSignal::Stopping | ActorSignal::Restarting))
  }

  fn push_signal(&self, signal: ActorSignal) {
    self.signals.borrow_mut().push_back(signal);
  }

  fn handle_signal(
    &self,
    system: &ActorSystem,
    core: &mut MailboxCore,
    slot: &mut Option<Box<dyn Actor>>,
    signal: ActorSignal,
    report: &mut MailboxTickReport,
  ) {
    match signal {
      | ActorSignal::Started => self.on_started(system, core, slot),
      | ActorSignal::Stopping => self.on_stopping(system, core, slot),
      | ActorSignal::Restarting => self.on_restarting(system, core, slot),
      | ActorSignal::Stopped => self.on_stopped(system, core, slot, report),
      | ActorSignal::Terminated(actor) => self.on_terminated(system, core, slot, actor),
    }
  }

  fn on_started(&self, system: &ActorSystem, core: &mut MailboxCore, slot: &mut Option<Box<dyn Actor>>) {
    if matches!(self.state(), MailboxState::Stopping | MailboxState::Stopped) {
      return;
    }
    if core.stop_requested {
      core.stop_requested = false;
      self.begin_stop(system, core, slot);
      return;
    }

    *slot = Some(core.props.new_actor());
    match self.deliver_signal(system, core, slot, &ActorSignal::Started) {
      | Ok(()) => {
        self.state.set(MailboxState::Alive);
        system.log_for(self.pid, LogLevel::Debug, format_args!("started"));
      },
      | Err(failure) => {
        system.log_for(self.pid, LogLevel::Error, format_args!("failed to start: {failure}"));
        self.state.set(MailboxState::Starting);
        self.signals.borrow_mut().push_front(ActorSignal::Stopping);
      },
    }
  }

  fn on_stopping(&self, system: &ActorSystem, core: &mut MailboxCore, slot: &mut Option<Box<dyn Actor>>) {
    match self.state() {
      | MailboxState::Stopping | MailboxState::Stopped => {},
      | MailboxState::Restarting => core.stop_requested = true,
      | _ => self.begin_stop(system, core, slot),
    }
  }

  fn begin_stop(&self, system: &ActorSystem, core: &mut MailboxCore, slot: &mut Option<Box<dyn Actor>>) {
    self.state.set(MailboxState::Suspended);
    if let Err(failure) = self.deliver_signal(system, core, slot, &ActorSignal::Stopping) {
      system.log_for(self.pid, LogLevel::Warn, format_args!("stopping handler failed: {failure}"));
    }
    self.state.set(MailboxState::Stopping);
    if core.children.is_empty() {
      self.push_signal(ActorSignal::Stopped);
    } else {
      for child in &core.children {
        system.notify(child, ActorSignal::Stopping);
      }
    }
  }

  fn on_restarting(&self, system: &ActorSystem, core: &mut MailboxCore, slot: &mut Option<Box<dyn Actor>>) {
    if matches!(self.state(), MailboxState::Stopping | MailboxState::Stopped | MailboxState::Restarting) {
      return;
    }
    self.state.set(MailboxState::Suspended);
    if let Err(failure) = self.deliver_signal(system, core, slot, &ActorSignal::Restarting) {
      system.log_for(self.pid, LogLevel::Warn, format_args!("restarting handler failed: {failure}"));
      let supervisor = core.supervisor.clone();
      let mut ctx = ActorContext::new(system, self, core, None, None);
      let directive = supervisor.supervise(&mut ctx, &failure);
      system.log_for(self.pid, LogLevel::Debug, format_args!("supervisor answered {directive:?}"));
    }
    self.state.set(MailboxState::Restarting);
    if core.children.is_empty() {
      self.push_signal(ActorSignal::Started);
    } else {
      for child in &core.children {
        system.notify(child, ActorSignal::Stopping);
      }
    }
  }

  fn on_stopped(
    &self,
    system: &ActorSystem,
    core: &mut MailboxCore,
    slot: &mut Option<Box<dyn Actor>>,
    report: &mut MailboxTickReport,
  ) {
    if let Err(failure) = self.deliver_signal(system, core, slot, &ActorSignal::Stopped) {
      system.log_for(self.pid, LogLevel::Warn, format_args!("stopped handler failed: {failure}"));
    }
    *slot = None;
    report.dropped.extend(self.messages.borrow_mut().drain(..));
    self.signals.borrow_mut().clear();
    self.state.set(MailboxState::Stopped);
    system.log_for(self.pid, LogLevel::Debug, format_args!("stopped"));

    let terminated = core.self_ref.clone();
    if let Some(parent) = &core.parent {
      system.notify(parent, ActorSignal::Terminated(terminated.clone()));
    }
    let watchers = mem::take(&mut *self.watchers.borrow_mut());
    for watcher in watchers.iter().filter(|watcher| core.parent.as_ref() != Some(*watcher)) {
      system.notify(watcher, ActorSignal::Terminated(terminated.clone()));
    }
  }

  fn on_terminated(
    &self,
    system: &ActorSystem,
    core: &mut MailboxCore,
    slot: &mut Option<Box<dyn Actor>>,
    actor: ActorRef,
  ) {
    let was_child = core.remove_child(&actor);
    if let Err(failure) = self.deliver_signal(system, core, slot, &ActorSignal::Terminated(actor)) {
      system.log_for(self.pid, LogLevel::Warn, format_args!("terminated handler failed: {failure}"));
    }
    if was_child && core.children.is_empty() {
      match self.state() {
        | MailboxState::Stopping => self.push_signal(ActorSignal::Stopped),
        | MailboxState::Restarting => self.push_signal(ActorSignal::Started),
        | _ => {},
      }
    }
  }

  fn deliver_signal(
    &self,
    system: &ActorSystem,
    core: &mut MailboxCore,
    slot: &mut Option<Box<dyn Actor>>,
    signal: &ActorSignal,
  ) -> Result<(), ActorFailure> {
    let Some(actor) = slot.as_mut() else {
      return Ok(());
    };
    let mut ctx = ActorContext::new(system, self, core, None, None);
    actor.signal(&mut ctx, signal)
  }

  fn dispatch_messages(
    &self,
    system: &ActorSystem,
    core: &mut MailboxCore,
    slot: &mut Option<Box<dyn Actor>>,
    report: &mut MailboxTickReport,
  ) {
    let Some(actor) = slot.as_mut() else {
      return;
    };
    self.state.set(MailboxState::Running);
    for _ in 0..self.throughput {
      if self.pending_signals() > 0 {
        break;
      }
      let next = self.messages.borrow_mut().pop_front();
      let Some(message) = next else {
        break;
      };
      let outcome = {
        let mut ctx = ActorContext::new(system, self, core, message.sender().cloned(), message.reply_to().cloned());
        actor.receive(&mut ctx, &message)
      };
      match outcome {
        | Ok(true) => report.messages += 1,
        | Ok(false) => {
          report.messages += 1;
          report.unhandled.push(message);
        },
        | Err(failure) => {
          system.log_for(
            self.pid,
            LogLevel::Warn,
            format_args!("failed handling {}: {failure}", message.type_name()),
          );
          let supervisor = core.supervisor.clone();
          let directive = {
            let mut ctx =
              ActorContext::new(system, self, core, message.sender().cloned(), message.reply_to().cloned());
            supervisor.supervise(&mut ctx, &failure)
          };
          match directive {
            | SupervisorDirective::Resume => report.messages += 1,
            | SupervisorDirective::Retry => {
              self.messages.borrow_mut().push_front(message);
              break;
            },
            | SupervisorDirective::Halt => {
              self.messages.borrow_mut().push_front(message);
              if !self.has_lifecycle_signal() {
                self.push_signal(ActorSignal::Stopping);
              }
              break;
            },
          }
        },
      }
    }
    if self.state() == MailboxState::Running {
      self.state.set(MailboxState::Alive);
    }
  }
}

impl core::fmt::Debug for ActorMailbox {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ActorMailbox")
      .field("pid", &self.pid)
      .field("state", &self.state())
      .field("messages", &self.pending_messages())
      .field("signals", &self.pending_signals())
      .finish()
  }
}
