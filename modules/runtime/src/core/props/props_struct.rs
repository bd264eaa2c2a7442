//! Spawn recipe shared by every incarnation of an actor.

use alloc::{boxed::Box, rc::Rc, string::String};
use core::fmt;

use cadence_utils_rs::core::sync::RcShared;

use crate::core::{actor::Actor, supervision::SupervisorStrategy};

/// Factory producing a fresh actor instance.
pub type ActorFactory = RcShared<dyn Fn() -> Box<dyn Actor>>;

/// Immutable recipe for spawning an actor.
///
/// The factory runs on every `Started` signal, so a restart always gets a fresh instance.
#[derive(Clone)]
pub struct Props {
  factory:    ActorFactory,
  alias:      Option<String>,
  supervisor: SupervisorStrategy,
}

impl Props {
  /// Creates props from a factory returning boxed actors.
  #[must_use]
  pub fn new<F>(factory: F) -> Self
  where
    F: Fn() -> Box<dyn Actor> + 'static, {
    let factory: Rc<dyn Fn() -> Box<dyn Actor>> = Rc::new(factory);
    Self { factory: RcShared::from_rc(factory), alias: None, supervisor: SupervisorStrategy::default() }
  }

  /// Creates props from a factory returning a concrete actor type.
  #[must_use]
  pub fn from_fn<F, A>(factory: F) -> Self
  where
    F: Fn() -> A + 'static,
    A: Actor + 'static, {
    Self::new(move || Box::new(factory()) as Box<dyn Actor>)
  }

  /// Returns props registering the actor under `alias`.
  #[must_use]
  pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
    self.alias = Some(alias.into());
    self
  }

  /// Returns props using `supervisor` for message failures.
  #[must_use]
  pub fn with_supervisor(mut self, supervisor: SupervisorStrategy) -> Self {
    self.supervisor = supervisor;
    self
  }

  /// Returns the requested alias.
  #[must_use]
  pub fn alias(&self) -> Option<&str> {
    self.alias.as_deref()
  }

  /// Returns the supervisor.
  #[must_use]
  pub const fn supervisor(&self) -> &SupervisorStrategy {
    &self.supervisor
  }

  /// Builds a fresh actor instance.
  #[must_use]
  pub fn new_actor(&self) -> Box<dyn Actor> {
    (self.factory)()
  }
}

impl fmt::Debug for Props {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Props").field("alias", &self.alias).field("supervisor", &self.supervisor).finish()
  }
}
